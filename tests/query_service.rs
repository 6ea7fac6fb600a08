use std::sync::Arc;

use csv_data_service::QueryError;
use csv_data_service::export::to_csv_bytes;
use csv_data_service::ingestion::csv::{ingest_csv_from_reader, reader_builder};
use csv_data_service::ingestion::{LoadOptions, load_table_state};
use csv_data_service::processing::PageRequest;
use csv_data_service::query::QueryService;
use csv_data_service::state::TableState;
use csv_data_service::types::{Table, Value};
use serde_json::json;

fn scenario_service() -> QueryService {
    QueryService::new(load_table_state(
        "tests/fixtures/scenario",
        &LoadOptions::default(),
    ))
}

fn numbered_table(rows: i64) -> Table {
    Table::new(
        vec!["n".to_string(), "label".to_string()],
        (0..rows)
            .map(|i| vec![Value::Int64(i), Value::Utf8(format!("row {i}"))])
            .collect(),
    )
}

fn page(page: usize, page_size: usize) -> PageRequest {
    PageRequest::new(page, page_size).unwrap()
}

#[test]
fn scenario_pages() {
    let service = scenario_service();

    let first = serde_json::to_value(service.fetch_page(page(1, 2)).unwrap()).unwrap();
    assert_eq!(
        first,
        json!({
            "page": 1,
            "page_size": 2,
            "total_records": 3,
            "total_pages": 2,
            "data": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}],
        })
    );

    let second = serde_json::to_value(service.fetch_page(page(2, 2)).unwrap()).unwrap();
    assert_eq!(second["data"], json!([{"id": 3, "name": "c"}]));
    assert_eq!(second["total_pages"], json!(2));

    assert_eq!(
        service.fetch_page(page(3, 2)).unwrap_err(),
        QueryError::PageOutOfRange
    );
}

#[test]
fn page_row_count_and_total_pages() {
    let service = QueryService::new(TableState::loaded(numbered_table(23)));
    for page_size in [1, 2, 5, 7, 10, 23, 24, 100] {
        let expected_pages = 23usize.div_ceil(page_size);
        for p in 1..=expected_pages + 1 {
            let start = (p - 1) * page_size;
            match service.fetch_page(page(p, page_size)) {
                Ok(result) => {
                    assert!(start < 23);
                    assert_eq!(result.data.len(), page_size.min(23 - start));
                    assert_eq!(result.total_pages, expected_pages);
                    assert_eq!(result.total_records, 23);
                    let first = result.data.iter().next().unwrap();
                    assert_eq!(first.get("n"), Some(&Value::Int64(start as i64)));
                }
                Err(err) => {
                    assert!(start >= 23);
                    assert_eq!(err, QueryError::PageOutOfRange);
                }
            }
        }
    }
}

#[test]
fn summary_sample_matches_first_page_of_five() {
    let service = QueryService::new(TableState::loaded(numbered_table(12)));
    let summary = service.fetch_summary().unwrap();
    let first_page = service.fetch_page(page(1, 5)).unwrap();

    assert_eq!(summary.total_records, 12);
    assert_eq!(summary.columns, ["n", "label"]);
    assert_eq!(
        serde_json::to_value(summary.sample).unwrap(),
        serde_json::to_value(first_page.data).unwrap()
    );
}

#[test]
fn summary_of_small_table_samples_all_rows() {
    let service = scenario_service();
    let summary = service.fetch_summary().unwrap();
    assert_eq!(summary.sample.len(), 3);
}

#[test]
fn export_round_trips() {
    let state = load_table_state("tests/fixtures/mixed", &LoadOptions::default());
    let table = Arc::clone(state.table().unwrap());

    let bytes = to_csv_bytes(&table).unwrap();
    let mut rdr = reader_builder().from_reader(bytes.as_slice());
    let reparsed = ingest_csv_from_reader(&mut rdr).unwrap();

    assert_eq!(reparsed, *table);
}

#[test]
fn export_of_union_table_round_trips() {
    let state = load_table_state("tests/fixtures/union", &LoadOptions::default());
    let service = QueryService::new(state);

    let bytes: Vec<u8> = service
        .fetch_all_chunked(1)
        .unwrap()
        .flat_map(Result::unwrap)
        .collect();
    assert_eq!(
        String::from_utf8(bytes.clone()).unwrap(),
        "x,y,z\n1,10,\n2,20,\n,30,foo\n,40,\"bar, baz\"\n"
    );

    let mut rdr = reader_builder().from_reader(bytes.as_slice());
    let reparsed = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(&reparsed, service.state().table().unwrap().as_ref());
}

#[test]
fn nan_cells_load_as_null_and_round_trip() {
    let mut rdr = reader_builder().from_reader("v\nNAN\n1.5\n-inf\n".as_bytes());
    let table = Arc::new(ingest_csv_from_reader(&mut rdr).unwrap());
    assert_eq!(
        table.rows,
        vec![
            vec![Value::Null],
            vec![Value::Float64(1.5)],
            vec![Value::Float64(f64::NEG_INFINITY)],
        ]
    );

    let bytes = to_csv_bytes(&table).unwrap();
    let mut rdr = reader_builder().from_reader(bytes.as_slice());
    let reparsed = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(reparsed, *table);
}

#[test]
fn zero_rows_per_chunk_is_clamped() {
    let service = scenario_service();
    let chunks: Vec<Vec<u8>> = service
        .fetch_all_chunked(0)
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.concat(), b"id,name\n1,a\n2,b\n3,c\n");
}

#[test]
fn unset_state_reports_no_data_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let service = QueryService::new(load_table_state(dir.path(), &LoadOptions::default()));

    assert_eq!(
        service.fetch_page(PageRequest::default()).unwrap_err(),
        QueryError::NoDataLoaded
    );
    assert_eq!(service.fetch_all().unwrap_err(), QueryError::NoDataLoaded);
    assert_eq!(service.fetch_summary().unwrap_err(), QueryError::NoDataLoaded);
}

#[test]
fn query_error_messages() {
    assert_eq!(
        QueryError::NoDataLoaded.to_string(),
        "No CSV files found or loaded."
    );
    assert_eq!(
        QueryError::PageOutOfRange.to_string(),
        "Page number out of range."
    );
}
