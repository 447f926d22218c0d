//! Page base.

use crate::templates::VERSION;

markup::define! {
    Base<Body: markup::Render>(body: Body, generated_at: String) {
        @markup::doctype()
        html[lang = "en"] {
            head {
                title { "Fuel Dashboard" }
                meta[charset = "utf-8"];
                meta[name = "viewport", content = "width=device-width, initial-scale=1"];
                link[rel = "stylesheet", href = "https://cdnjs.cloudflare.com/ajax/libs/bulma/0.9.4/css/bulma.min.css"];
                style { "figure.gauge { max-width: 240px; }" }
            }
            body {
                @body
                footer.footer {
                    div.container {
                        p {
                            strong { "Fuel Dashboard " @VERSION }
                            " · generated at " @generated_at
                        }
                    }
                }
            }
        }
    }
}
