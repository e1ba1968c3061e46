//! End-to-end run over a small literal input

use super::quiet_driver;
use crate::models::{
    AirportAmountsRow, AirportCategory, DistanceSummaryRow, PassengerAverageRow, TimeOfDay,
};
use crate::processor::CsvChunkSource;
use crate::report::Report;
use crate::test_helpers::{TripRowBuilder, csv_input, with_invalid_utf8};
use chrono::NaiveDate;

const INPUT: &str = "\
VendorID,tpep_pickup_datetime,tpep_dropoff_datetime,passenger_count,trip_distance,RatecodeID,store_and_fwd_flag,PULocationID,DOLocationID,payment_type,fare_amount,extra,mta_tax,tip_amount,tolls_amount,improvement_surcharge,total_amount,congestion_surcharge,Airport_fee
2,2024-01-15 08:00:00,2024-01-15 08:25:00,2,5.0,2,N,132,236,1,70.0,0.0,0.5,10.0,6.94,1.0,60.0,2.5,1.75
1,2024-01-15 09:10:00,2024-01-15 09:30:00,1,1.2,1,N,132,161,1,10.0,0.0,0.5,2.0,0.0,1.0,15.0,2.5,0.0
2,2024-01-15 13:00:00,2024-01-15 13:40:00,1,abc,2,N,132,50,1,70.0,0.0,0.5,5.0,0.0,1.0,80.0,2.5,1.75
2,2024-01-16 23:00:00,2024-01-16 23:15:00,4,0.0,2,N,048,132,2,70.0,0.0,0.5,5.0,0.0,1.0,45.0,2.5,1.75
1,2024-01-16 18:30:00,2024-01-16 18:50:00,,3.5,,N,048,230,1,20.0,0.0,0.5,4.0,0.0,1.0,25.0,2.5,0.0
";

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn test_five_row_run_produces_literal_reports() {
    let mut source = CsvChunkSource::new(INPUT.as_bytes(), 2).unwrap();
    let run = quiet_driver(2).run(&mut source).unwrap();

    assert_eq!(
        run.reports.distance,
        Report::Rows(vec![
            DistanceSummaryRow {
                date: date(15),
                time_of_day: TimeOfDay::Morning,
                shortest_distance: 1.2,
                longest_distance: 5.0,
            },
            DistanceSummaryRow {
                date: date(16),
                time_of_day: TimeOfDay::Evening,
                shortest_distance: 3.5,
                longest_distance: 3.5,
            },
        ])
    );

    assert_eq!(
        run.reports.airport,
        Report::Rows(vec![
            AirportAmountsRow {
                category: AirportCategory::Jfk,
                total_amount: 105.0,
                tip_amount: 15.0,
                tolls_amount: 6.94,
            },
            AirportAmountsRow {
                category: AirportCategory::Newark,
                total_amount: 0.0,
                tip_amount: 0.0,
                tolls_amount: 0.0,
            },
            AirportAmountsRow {
                category: AirportCategory::NassauWestchester,
                total_amount: 0.0,
                tip_amount: 0.0,
                tolls_amount: 0.0,
            },
        ])
    );

    assert_eq!(
        run.reports.passenger,
        Report::Rows(vec![
            PassengerAverageRow {
                date: date(15),
                pickup_location_id: "132".to_string(),
                average_passenger_count: 1.5,
            },
            PassengerAverageRow {
                date: date(16),
                pickup_location_id: "048".to_string(),
                average_passenger_count: 2.0,
            },
        ])
    );

    assert_eq!(run.stats.rows_read, 5);
    assert_eq!(run.stats.rows_normalized, 4);
    assert_eq!(run.stats.rows_failed, 1);
    assert_eq!(run.stats.distance_eligible, 3);
    assert_eq!(run.stats.airport_trips, 2);
    assert_eq!(run.stats.chunks_processed, 3);
    assert!(run.stats.failures[0].starts_with("Row 3:"));
}

#[test]
fn test_all_rows_malformed_yields_no_data() {
    let input = "\
tpep_pickup_datetime,tpep_dropoff_datetime,passenger_count,trip_distance,RatecodeID,PULocationID,tip_amount,tolls_amount,total_amount
2024-01-15 08:00:00,2024-01-15 08:25:00,1,x,1,132,1.0,0.0,10.0
15/01/2024 08:00,2024-01-15 08:25:00,1,2.0,1,132,1.0,0.0,10.0
";
    let mut source = CsvChunkSource::new(input.as_bytes(), 10).unwrap();
    let run = quiet_driver(10).run(&mut source).unwrap();

    assert_eq!(run.stats.rows_failed, 2);
    assert!(run.reports.distance.is_empty());
    assert!(run.reports.passenger.is_empty());
    assert_eq!(run.reports.airport.len(), 3);
}

#[test]
fn test_undecodable_bytes_fail_only_their_row() {
    let rows = vec![
        TripRowBuilder::new().passengers("1"),
        TripRowBuilder::new().vendor("@@").passengers("3"),
        TripRowBuilder::new().distance("2.@@").passengers("6"),
        TripRowBuilder::new().passengers("2"),
    ];
    let input = with_invalid_utf8(&csv_input(&rows), "@@");
    let mut source = CsvChunkSource::new(input.as_slice(), 2).unwrap();
    let run = quiet_driver(2).run(&mut source).unwrap();

    assert_eq!(run.stats.rows_read, 4);
    assert_eq!(run.stats.rows_normalized, 3);
    assert_eq!(run.stats.rows_failed, 1);
    assert!(run.stats.failures[0].starts_with("Row 3:"));
    assert!(run.stats.failures[0].contains("trip_distance"));

    assert_eq!(
        run.reports.passenger,
        Report::Rows(vec![PassengerAverageRow {
            date: date(15),
            pickup_location_id: "161".to_string(),
            average_passenger_count: 2.0,
        }])
    );
}
