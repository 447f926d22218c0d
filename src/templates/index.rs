//! Dashboard page.

use crate::core::gauge::Gauge;
use crate::prelude::*;
use crate::templates::gauge::GaugeChart;
use crate::templates::table::Table;
use crate::templates::user::User;

markup::define! {
    Index<'a>(page: &'a Page) {
        section.hero."is-info" {
            div."hero-body" {
                div.container {
                    h1.title."is-4" { "Fuel Dashboard" }
                }
            }
        }
        section.section {
            div.container {
                @match page {
                    Page::Loaded(dashboard) => {
                        div[id = "userInfo"] { @User { user: &dashboard.user } }
                        div[id = "data"] { @Table { trackers: &dashboard.trackers } }
                        div[id = "fuelGauge"] {
                            @if let Some((current, max)) = dashboard.gauge_level() {
                                @GaugeChart { gauge: Gauge::new(current, max) }
                            }
                        }
                    }
                    Page::Failed(message) => {
                        div[id = "userInfo"] { p { "Error: " @message } }
                        div[id = "data"] { p { "Error: " @message } }
                        div[id = "fuelGauge"] {}
                    }
                }
            }
        }
    }
}
