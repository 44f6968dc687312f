use chrono::Local;
use csv::Writer;
use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;
use std::io;

/// Terminal logger setup shared by the report driver and the examples.
/// Accepts "debug"/"info"/"warn"/"error"; "off" or "none" skips the setup
/// entirely. A second call is harmless, the already installed logger
/// stays.
pub fn init_logging(loglevel: Option<String>) {
    let is_logging_disabled = loglevel
        .as_ref()
        .map(|level| level == "off" || level == "none")
        .unwrap_or(false);
    if is_logging_disabled {
        return;
    }
    let log_option = match loglevel.as_deref() {
        Some("debug") => LevelFilter::Debug,
        Some("info") | None => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some(other) => {
            println!("unknown loglevel {}, falling back to info", other);
            LevelFilter::Info
        }
    };
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    if logger_instance.is_ok() {
        info!("logging started with loglevel {}", log_option);
    }
}

/// Saves a built table into a csv file: headers first, then the rows
pub fn save_records_to_csv(
    headers: &[&str],
    rows: &[Vec<String>],
    filename: &str,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Report file name carrying the moment of the run
pub fn timestamped_name(prefix: &str) -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("{}_{}.csv", prefix, date_and_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_records_to_csv() {
        let path = std::env::temp_dir().join("linsys_table_test.csv");
        let filename = path.to_str().unwrap();
        let headers = ["a", "b"];
        let rows = vec![vec!["1".to_string(), "2".to_string()]];
        save_records_to_csv(&headers, &rows, filename).unwrap();
        let content = std::fs::read_to_string(filename).unwrap();
        assert!(content.contains("a,b"));
        assert!(content.contains("1,2"));
        std::fs::remove_file(filename).ok();
    }

    #[test]
    fn test_timestamped_name() {
        let name = timestamped_name("accuracy");
        assert!(name.starts_with("accuracy_"));
        assert!(name.ends_with(".csv"));
    }
}
