#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod linalg;
pub mod report;
pub mod solvers;

use crate::Utils::logger::{init_logging, save_records_to_csv, timestamped_name};
use crate::report::comparison::{
    ACCURACY_HEADERS, CONDITIONING_HEADERS, accuracy_records, build_table, conditioning_records,
};

fn main() {
    init_logging(Some("info".to_string()));
    let example = 2;
    match example {
        0 => {
            // accuracy of the four methods over the fixed battery
            let rows = accuracy_records();
            println!("{}", build_table(&ACCURACY_HEADERS, &rows));
        }
        1 => {
            // behavior on the weakly conditioned generated systems
            let rows = conditioning_records();
            println!("{}", build_table(&CONDITIONING_HEADERS, &rows));
        }
        2 => {
            // the full classic run: both tables printed and saved
            let rows1 = accuracy_records();
            println!("{}", build_table(&ACCURACY_HEADERS, &rows1));
            let rows2 = conditioning_records();
            println!("{}", build_table(&CONDITIONING_HEADERS, &rows2));
            save_records_to_csv(&ACCURACY_HEADERS, &rows1, &timestamped_name("accuracy"))
                .expect("failed to save the accuracy table");
            save_records_to_csv(
                &CONDITIONING_HEADERS,
                &rows2,
                &timestamped_name("conditioning"),
            )
            .expect("failed to save the conditioning table");
        }
        _ => println!("there is no example {}", example),
    }
}
