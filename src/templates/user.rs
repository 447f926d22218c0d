use crate::prelude::*;

markup::define! {
    User<'a>(user: &'a UserInfo) {
        p { "Client: " b { @user.name } }
        p { "ID: " b { @user.id } }
    }
}
