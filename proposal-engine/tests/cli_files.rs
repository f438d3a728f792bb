use proposal_engine::cli::{Command, run};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn proposal(num_pros: u32) -> Value {
    json!({
        "clientName": "Acme",
        "services": {
            "HQ": {
                "2024-03-01": {
                    "services": [{
                        "serviceType": "massage", "date": "2024-03-01", "appTime": 20,
                        "numPros": num_pros, "totalHours": 3, "hourlyRate": 20, "proHourly": 15
                    }]
                }
            }
        }
    })
}

#[test]
fn test_recalculate_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "proposal.json", &proposal(2));

    let command = Command::parse(vec!["recalculate".to_string(), input]).unwrap();
    let output: Value = serde_json::from_str(&run(&command).unwrap()).unwrap();

    assert_eq!(output["summary"]["totalEventCost"], json!(120.0));
    assert_eq!(output["summary"]["totalProRevenue"], json!(90.0));
    assert_eq!(output["summary"]["profitMargin"], json!(25.0));
    assert_eq!(output["eventDates"], json!(["2024-03-01"]));
}

#[test]
fn test_diff_files() {
    let dir = TempDir::new().unwrap();
    let original = write(&dir, "original.json", &proposal(2));
    let updated = write(&dir, "updated.json", &proposal(3));

    let command = Command::parse(vec!["diff".to_string(), original, updated]).unwrap();
    let output: Value = serde_json::from_str(&run(&command).unwrap()).unwrap();

    assert_eq!(output["HQ-2024-03-01-0-pros"]["percentChange"], json!(50.0));
    assert_eq!(output["HQ-2024-03-01-0-cost"]["updated"], json!(180.0));
    assert_eq!(output.as_object().unwrap().len(), 2);
}

#[test]
fn test_prepare_file() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "client.json",
        &json!({
            "name": "Acme",
            "locations": ["HQ"],
            "events": { "HQ": [{ "services": proposal(2)["services"]["HQ"]["2024-03-01"]["services"] }] }
        }),
    );

    let command = Command::parse(vec!["prepare".to_string(), input]).unwrap();
    let output: Value = serde_json::from_str(&run(&command).unwrap()).unwrap();

    assert_eq!(output["clientName"], json!("Acme"));
    assert_eq!(output["services"]["HQ"]["2024-03-01"]["totalCost"], json!(120.0));
}

#[test]
fn test_malformed_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let command = Command::Recalculate { input: path };
    let err = run(&command).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to parse"));
}
