#[cfg(test)]
mod tests {
    use crate::error::DataFormatError;
    use crate::models::EmissionSource;
    use crate::parsing::loader::{load_daily_csv, load_dataset, load_hourly_csv};
    use chrono::NaiveDate;
    use std::io::Write;

    const DAILY_HEADER: &str = "Local date,D,CO2 Emissions Generated,\
CO2 Emissions Generated by Coal,CO2 Emissions Generated by Natural Gas,\
CO2 Emissions Generated by Petroleum";

    const HOURLY_HEADER: &str = "Local date,Hour,NG,CO2 Emissions Generated";

    fn daily_csv(rows: &[&str]) -> String {
        format!("{}\n{}\n", DAILY_HEADER, rows.join("\n"))
    }

    fn hourly_csv(rows: &[&str]) -> String {
        format!("{}\n{}\n", HOURLY_HEADER, rows.join("\n"))
    }

    #[test]
    fn test_load_daily_basic() {
        let csv = daily_csv(&[
            "2019-01-01,10500.5,4200.0,2100.0,1600.0,500.0",
            "2019-01-02,9800.25,4100.0,2000.0,1650.0,450.0",
        ]);
        let rows = load_daily_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].local_date,
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
        );
        assert_eq!(rows[0].year, 2019);
        assert_eq!(rows[0].net_generation, 10500.5);
        assert_eq!(rows[0].co2_total, 4200.0);
        assert_eq!(rows[0].co2_for(EmissionSource::Coal), 2100.0);
        assert_eq!(rows[0].co2_for(EmissionSource::NaturalGas), 1600.0);
        assert_eq!(rows[0].co2_for(EmissionSource::Petroleum), 500.0);
    }

    #[test]
    fn test_load_daily_us_date_format() {
        let csv = daily_csv(&["7/4/2020,8000.0,3000.0,1500.0,1200.0,300.0"]);
        let rows = load_daily_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            rows[0].local_date,
            NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()
        );
    }

    #[test]
    fn test_load_daily_missing_column() {
        let csv = "Local date,D\n2019-01-01,100.0\n";
        let err = load_daily_csv(csv.as_bytes()).unwrap_err();
        match err {
            DataFormatError::MissingColumn { table, column } => {
                assert_eq!(table, "daily");
                assert_eq!(column, "CO2 Emissions Generated");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_daily_bad_date_fails_fast() {
        let csv = daily_csv(&[
            "2019-01-01,100.0,40.0,20.0,15.0,5.0",
            "not-a-date,100.0,40.0,20.0,15.0,5.0",
        ]);
        let err = load_daily_csv(csv.as_bytes()).unwrap_err();
        match err {
            DataFormatError::BadDate { table, row, value } => {
                assert_eq!(table, "daily");
                assert_eq!(row, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected BadDate, got {:?}", other),
        }
    }

    #[test]
    fn test_load_daily_bad_number_fails_fast() {
        let csv = daily_csv(&["2019-01-01,n/a,40.0,20.0,15.0,5.0"]);
        let err = load_daily_csv(csv.as_bytes()).unwrap_err();
        match err {
            DataFormatError::BadNumber { column, row, .. } => {
                assert_eq!(column, "D");
                assert_eq!(row, 2);
            }
            other => panic!("expected BadNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_load_hourly_basic() {
        let csv = hourly_csv(&[
            "2019-01-01,1,450.0,180.0",
            "2019-01-01,2,430.5,175.0",
            "2019-08-15,24,470.0,190.0",
        ]);
        let rows = load_hourly_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].hour, 1);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[2].hour, 24);
        assert_eq!(rows[2].month, 8);
        assert_eq!(rows[1].net_generation, 430.5);
    }

    #[test]
    fn test_load_hourly_missing_hour_column() {
        let csv = "Local date,NG,CO2 Emissions Generated\n2019-01-01,450.0,180.0\n";
        let err = load_hourly_csv(csv.as_bytes()).unwrap_err();
        match err {
            DataFormatError::MissingColumn { table, column } => {
                assert_eq!(table, "hourly");
                assert_eq!(column, "Hour");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_hourly_bad_hour() {
        let csv = hourly_csv(&["2019-01-01,first,450.0,180.0"]);
        let err = load_hourly_csv(csv.as_bytes()).unwrap_err();
        match err {
            DataFormatError::BadNumber { column, .. } => assert_eq!(column, "Hour"),
            other => panic!("expected BadNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_load_dataset_from_files() {
        let dir = tempfile::tempdir().unwrap();

        let daily_path = dir.path().join("daily.csv");
        let mut daily_file = std::fs::File::create(&daily_path).unwrap();
        write!(
            daily_file,
            "{}",
            daily_csv(&[
                "2021-03-01,9000.0,3500.0,1700.0,1400.0,400.0",
                "2020-03-01,8800.0,3400.0,1650.0,1380.0,370.0",
            ])
        )
        .unwrap();

        let hourly_path = dir.path().join("hourly.csv");
        let mut hourly_file = std::fs::File::create(&hourly_path).unwrap();
        write!(
            hourly_file,
            "{}",
            hourly_csv(&["2021-03-01,1,400.0,150.0", "2021-03-01,2,410.0,155.0"])
        )
        .unwrap();

        let ctx = load_dataset(&daily_path, &hourly_path).unwrap();
        assert_eq!(ctx.daily.len(), 2);
        assert_eq!(ctx.hourly.len(), 2);
        // First-seen order from the daily rows
        assert_eq!(ctx.years.years(), &[2021, 2020]);
        assert_eq!(ctx.years.default_year(), Some(2021));
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = load_dataset(&missing, &missing).unwrap_err();
        match err {
            DataFormatError::Io { table, .. } => assert_eq!(table, "daily"),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
