use assert_cmd::Command;
use chrono::{Duration, NaiveDate, Utc};
use financewise_core::domain::{Principal, SavingsGoal, TransactionData};
use predicates::str::contains;
use tempfile::TempDir;

const SAMPLE_INPUTS: &str = r#"{
    "primaryIncome": 100000,
    "rent": 30000,
    "food": 10000,
    "transport": 5000,
    "savingsType": "amount",
    "savingsAmount": 20000,
    "goalType": "short-term"
}"#;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("financewise_cli").unwrap();
    cmd.env("FINANCEWISE_HOME", home.path())
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn plan_prints_report() {
    let home = TempDir::new().unwrap();
    let inputs = home.path().join("inputs.json");
    std::fs::write(&inputs, SAMPLE_INPUTS).unwrap();

    cli(&home)
        .arg("plan")
        .arg(&inputs)
        .assert()
        .success()
        .stdout(contains("Budget Plan"))
        .stdout(contains("50/30/20"))
        .stdout(contains("INR 100,000"))
        .stdout(contains("Financial Health"));
}

#[test]
fn plan_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let inputs = home.path().join("inputs.json");
    std::fs::write(&inputs, SAMPLE_INPUTS).unwrap();

    let output = cli(&home)
        .args(["plan", inputs.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["plan"]["summary"]["totalIncome"], 100000.0);
    assert_eq!(report["plan"]["allocation"]["rule"], "50/30/20");
    assert_eq!(report["projection"]["points"].as_array().unwrap().len(), 12);
    let recommendations = report["recommendations"]["recommendations"]
        .as_array()
        .unwrap();
    assert!((3..=5).contains(&recommendations.len()));
}

#[test]
fn plan_rejects_negative_amounts_and_oversized_savings_share() {
    let home = TempDir::new().unwrap();
    let inputs = home.path().join("inputs.json");

    std::fs::write(&inputs, r#"{"primaryIncome": 1000, "rent": -5000}"#).unwrap();
    cli(&home)
        .args(["plan", inputs.to_str().unwrap(), "--json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("`rent` must not be negative"));

    std::fs::write(
        &inputs,
        r#"{"primaryIncome": 1000, "savingsType": "percentage", "savingsPercentage": 250}"#,
    )
    .unwrap();
    cli(&home)
        .args(["plan", inputs.to_str().unwrap(), "--json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("savingsPercentage"));
}

#[test]
fn goal_warns_when_unaffordable() {
    let home = TempDir::new().unwrap();
    let goal = SavingsGoal::new(
        "Car",
        100_000.0,
        Principal::new("alice"),
        Utc::now() - Duration::days(1),
    )
    .with_target_months(10);
    let path = home.path().join("goal.json");
    std::fs::write(&path, serde_json::to_string(&goal).unwrap()).unwrap();

    cli(&home)
        .args(["goal", path.to_str().unwrap(), "1,000"])
        .assert()
        .success()
        .stdout(contains("Goal: Car"))
        .stdout(contains("Consider extending"))
        .stdout(contains("Extended timeline"));
}

#[test]
fn aggregate_totals_the_requested_month() {
    let home = TempDir::new().unwrap();
    let user = Principal::new("alice");
    let day = |d| NaiveDate::from_ymd_opt(2026, 4, d).unwrap();
    let txns = vec![
        TransactionData::income(50_000.0, "Salary", day(1), user.clone()),
        TransactionData::expense(1_500.0, "Food", day(3), user.clone()),
        TransactionData::expense(500.0, "", day(4), user.clone()),
        TransactionData::expense(9_000.0, "Rent", NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(), user),
    ];
    let path = home.path().join("transactions.json");
    std::fs::write(&path, serde_json::to_string(&txns).unwrap()).unwrap();

    let output = cli(&home)
        .args(["aggregate", path.to_str().unwrap(), "2026-04-20", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let totals: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(totals["income"], 50000.0);
    assert_eq!(totals["expenses"], 2000.0);
    assert_eq!(totals["transactionCount"], 3);
    assert_eq!(totals["expenseCategories"][0]["category"], "Food");
    assert_eq!(totals["expenseCategories"][1]["category"], "Uncategorized");
}

#[test]
fn reminder_emits_icalendar() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["reminder", "1. Review subscriptions, cancel unused", "2026-11-01"])
        .assert()
        .success()
        .stdout(contains("BEGIN:VCALENDAR"))
        .stdout(contains("DTSTART;VALUE=DATE:20261101"))
        .stdout(contains("RRULE:FREQ=MONTHLY"))
        .stdout(contains("SUMMARY:Review subscriptions\\, cancel unused"));
}

#[test]
fn version_reports_package_version() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_prints_usage() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("bogus")
        .assert()
        .failure()
        .stderr(contains("financewise_cli <command>"));
}

#[test]
fn bad_date_is_reported() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["reminder", "Save", "next-week"])
        .assert()
        .failure()
        .stderr(contains("not a YYYY-MM-DD date"));
}
