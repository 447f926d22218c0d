//! Enriched tracker table.

use crate::prelude::*;
use crate::templates::{cell, fuel_cells};

markup::define! {
    Table<'a>(trackers: &'a [EnrichedTracker]) {
        @if trackers.is_empty() {
            p { "No data found in the API." }
        } else {
            table.table."is-striped"."is-fullwidth" {
                thead {
                    tr {
                        th { "ID" }
                        th { "Label" }
                        th { "Device ID" }
                        th { "Source ID" }
                        th { "Fuel Sensor Label" }
                        th { "Fuel Sensor Units" }
                        th { "Fuel Sensor Max Value" }
                        th { "Fuel Sensor Current Value" }
                    }
                }
                tbody {
                    @for tracker in trackers.iter() {
                        @Row { tracker }
                    }
                }
            }
        }
    }

    Row<'a>(tracker: &'a EnrichedTracker) {
        tr {
            td { @cell(tracker.tracker.id) }
            td { @cell(tracker.tracker.label.as_ref()) }
            td { @cell(tracker.tracker.device_id()) }
            td { @cell(tracker.tracker.source_id()) }
            @for value in fuel_cells(&tracker.fuel) {
                td { @value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enriched(id: i64, fuel: FuelReading) -> EnrichedTracker {
        EnrichedTracker {
            tracker: Tracker {
                id: Some(id),
                label: Some(format!("Truck {}", id)),
                source: Some(Source {
                    id: Some(id * 10),
                    device_id: Some(format!("IMEI{}", id)),
                }),
            },
            fuel,
        }
    }

    fn tank(value: f64) -> FuelReading {
        FuelReading::Available(FuelSensor {
            label: Some("Tanque de 35.000 L".into()),
            units: Some("litres".into()),
            max_value: Some(35.0),
            value: Some(value),
        })
    }

    fn render(trackers: &[EnrichedTracker]) -> String {
        Table { trackers }.to_string()
    }

    #[test]
    fn empty() {
        assert_eq!(render(&[]), "<p>No data found in the API.</p>");
    }

    #[test]
    fn populated_row() {
        let html = render(&[enriched(1, tank(12.5))]);
        assert!(html.contains(
            "<tr><td>1</td><td>Truck 1</td><td>IMEI1</td><td>10</td>\
             <td>Tanque de 35.000 L</td><td>litres</td><td>35</td><td>12.5</td></tr>"
        ));
    }

    #[test]
    fn unavailable_row() {
        let html = render(&[enriched(1, FuelReading::Unavailable)]);
        assert_eq!(html.matches("<td>unavailable</td>").count(), 4);
    }

    #[test]
    fn error_row() {
        let html = render(&[enriched(1, FuelReading::Error)]);
        assert_eq!(html.matches("<td>error</td>").count(), 4);
    }

    #[test]
    fn missing_fields() {
        let html = render(&[EnrichedTracker {
            tracker: Tracker::default(),
            fuel: FuelReading::Available(FuelSensor {
                label: Some("Tank".into()),
                units: None,
                max_value: None,
                value: Some(0.0),
            }),
        }]);
        assert!(html.contains(
            "<tr><td>N/A</td><td>N/A</td><td>N/A</td><td>N/A</td>\
             <td>Tank</td><td>N/A</td><td>N/A</td><td>0</td></tr>"
        ));
    }

    #[test]
    fn one_failed_of_three() {
        let html = render(&[enriched(1, tank(10.0)), enriched(2, FuelReading::Error), enriched(3, tank(20.0))]);
        assert_eq!(html.matches("<tr>").count(), 4);
        assert!(html.contains("<td>Truck 1</td><td>IMEI1</td><td>10</td><td>Tanque de 35.000 L</td><td>litres</td><td>35</td><td>10</td>"));
        assert!(html.contains("<td>Truck 2</td><td>IMEI2</td><td>20</td><td>error</td><td>error</td><td>error</td><td>error</td>"));
        assert!(html.contains("<td>Truck 3</td><td>IMEI3</td><td>30</td><td>Tanque de 35.000 L</td><td>litres</td><td>35</td><td>20</td>"));
    }
}
