//! End-to-end sessions driven through the public `Calculator` API.

use shopcalc::checkpoint::Checkpoint;
use shopcalc::config::Config;
use shopcalc::core::{Command, History, HistoryEntry, Input, Mode, PercentError, Session};
use shopcalc::{CalcError, Calculator, Outcome, Settings};
use std::path::Path;

fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < 1e-9)
}

fn labels(calc: &Calculator) -> Vec<String> {
    calc.session()
        .history()
        .entries()
        .iter()
        .map(|e| e.label.clone())
        .collect()
}

#[test]
fn precedence_is_standard() {
    let mut calc = Calculator::default();
    calc.press_keys("2+3*4=").unwrap();
    assert_eq!(calc.session().result(), Some(14.0));
}

#[test]
fn margin_discount_and_vat_on_one_hundred() {
    let mut calc = Calculator::default();
    calc.press_keys("100=a10=").unwrap();
    assert!(approx(calc.session().result(), 110.0));

    let mut calc = Calculator::default();
    calc.press_keys("100=s10=").unwrap();
    assert!(approx(calc.session().result(), 90.0));

    let mut calc = Calculator::default();
    calc.press_keys("100=d").unwrap();
    assert!(approx(calc.session().result(), 110.0));

    assert_eq!(
        labels(&calc),
        vec!["100".to_string(), "100 + VAT".to_string()]
    );
}

#[test]
fn percent_labels_name_the_adjustment() {
    let mut calc = Calculator::default();
    calc.press_keys("200=a15=").unwrap();
    calc.press_keys("s5=").unwrap();

    let labels = labels(&calc);
    assert_eq!(labels[1], "200 + margin 15%");
    assert!(labels[2].ends_with(" - discount 5%"), "{}", labels[2]);
}

#[test]
fn sum_history_appends_grand_total() {
    let history = History::new()
        .record(HistoryEntry::new("10", 10.0))
        .record(HistoryEntry::new("20", 20.0));
    let mut calc = Calculator::with_session(
        Session::new().with_history(history),
        Settings::default(),
    );

    calc.press(Input::Command(Command::SumHistory)).unwrap();

    assert_eq!(calc.session().result(), Some(30.0));
    assert_eq!(calc.session().history().len(), 3);
    let last = calc.session().history().last().unwrap();
    assert_eq!(last.label, "grand total");
    assert_eq!(last.value, 30.0);

    // the grand total is itself summed on the next press
    calc.press(Input::Command(Command::SumHistory)).unwrap();
    assert_eq!(calc.session().result(), Some(60.0));
}

#[test]
fn sum_history_with_vat() {
    let mut calc = Calculator::default();
    calc.press_keys("40=60=w").unwrap();
    assert!(approx(calc.session().result(), 110.0));
    assert_eq!(
        calc.session().history().last().unwrap().label,
        "grand total + VAT"
    );
}

#[test]
fn sum_of_empty_history_is_zero() {
    let mut calc = Calculator::default();
    calc.press_keys("q").unwrap();
    assert_eq!(calc.session().result(), Some(0.0));
    assert_eq!(calc.session().history().len(), 1);
}

#[test]
fn clear_history_keeps_work_in_progress() {
    let mut calc = Calculator::default();
    calc.press_keys("5=7+8").unwrap();

    calc.press(Input::Command(Command::ClearHistory)).unwrap();

    assert!(calc.session().history().is_empty());
    assert_eq!(calc.session().result(), None);
    assert_eq!(calc.session().expression(), "7+");
    assert_eq!(calc.session().input_buffer(), "8");
}

#[test]
fn clear_entry_keeps_history() {
    let mut calc = Calculator::default();
    calc.press_keys("5=7+8").unwrap();

    calc.press(Input::Command(Command::ClearEntry)).unwrap();

    assert_eq!(calc.session().history().len(), 1);
    assert_eq!(calc.session().result(), None);
    assert_eq!(calc.session().full_expression(), "");
}

#[test]
fn percent_entry_ignores_everything_but_digits_commit_and_cancel() {
    let mut calc = Calculator::default();
    calc.press_keys("50=a").unwrap();
    let entered = calc.session().clone();

    for c in ".+-*/qwec".chars() {
        let outcome = calc.press(Input::from_char(c).unwrap()).unwrap();
        assert_eq!(outcome, Outcome::Ignored, "key {c:?}");
    }
    assert_eq!(calc.session(), &entered);

    calc.press(Input::Backspace).unwrap();
    assert_eq!(calc.session(), &entered);

    calc.press_keys("20").unwrap();
    assert_eq!(calc.session().percent_buffer(), "20");

    calc.press(Input::Cancel).unwrap();
    assert_eq!(calc.session().mode(), Mode::Normal);
    assert_eq!(calc.session().percent_buffer(), "");
    assert_eq!(calc.session().result(), Some(50.0));
}

#[test]
fn empty_percent_commit_is_discarded() {
    let mut calc = Calculator::default();
    calc.press_keys("50=s").unwrap();

    let outcome = calc.press(Input::Commit).unwrap();

    assert_eq!(outcome, Outcome::Discarded(PercentError::Empty));
    assert_eq!(calc.session().mode(), Mode::Normal);
    assert_eq!(calc.session().result(), Some(50.0));
    assert_eq!(calc.session().history().len(), 1);
}

#[test]
fn evaluation_errors_leave_session_alone() {
    let mut calc = Calculator::default();
    calc.press_keys("4=1/0").unwrap();
    let before = calc.session().clone();

    let err = calc.press(Input::Commit).unwrap_err();
    assert!(matches!(err, CalcError::Evaluation { .. }));
    assert_eq!(calc.session(), &before);

    let mut calc = Calculator::default();
    assert!(calc.press(Input::Commit).is_err());
    assert_eq!(calc.session(), &Session::new());
}

#[test]
fn result_seeds_the_next_expression() {
    let mut calc = Calculator::default();
    calc.press_keys("7/2=").unwrap();
    calc.press_keys("*4").unwrap();

    assert_eq!(calc.session().full_expression(), "3.5*4");
    assert_eq!(calc.session().result(), None);

    calc.press(Input::Commit).unwrap();
    assert_eq!(calc.session().result(), Some(14.0));
}

#[test]
fn delete_from_display_order() {
    let mut calc = Calculator::default();
    calc.press_keys("1=2=3=4=").unwrap();

    let removed = calc.delete_history(1).unwrap();
    assert_eq!(removed.label, "3");
    assert_eq!(labels(&calc), vec!["1", "2", "4"]);

    let snapshot = calc.snapshot();
    let shown: Vec<_> = snapshot.history.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(shown, vec!["4", "2", "1"]);
}

#[test]
fn snapshot_shows_banner_only_in_percent_entry() {
    let mut calc = Calculator::default();
    calc.press_keys("1234.5=").unwrap();

    let snapshot = calc.snapshot();
    assert_eq!(snapshot.result_line, "1234.5");
    assert_eq!(snapshot.history[0].value, "1,234.5");
    assert!(snapshot.banner.is_none());

    calc.press_keys("s").unwrap();
    let banner = calc.snapshot().banner.unwrap();
    assert!(banner.contains("discount"), "{banner}");
}

#[test]
fn configured_vat_rate_applies() {
    let config = Config::from_toml("vat_rate = 0.2\n", Path::new("config.toml")).unwrap();
    let mut calc = Calculator::new(config.settings());

    calc.press_keys("50=d").unwrap();
    assert!(approx(calc.session().result(), 60.0));
}

#[test]
fn checkpoint_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut calc = Calculator::default();
    calc.press_keys("12*3=s50=4+").unwrap();

    for name in ["session.json", "session.bin"] {
        let path = dir.path().join(name);
        calc.checkpoint().save(&path).unwrap();

        let resumed = Calculator::resume(Checkpoint::load(&path).unwrap(), Settings::default());
        assert_eq!(resumed.session(), calc.session());
    }
}

#[test]
fn negative_result_seeds_a_valid_expression() {
    let mut calc = Calculator::default();
    calc.press_keys("1-5=").unwrap();
    assert_eq!(calc.session().result(), Some(-4.0));

    calc.press_keys("+2").unwrap();
    assert_eq!(calc.session().full_expression(), "-4+2");

    calc.press(Input::Commit).unwrap();
    assert_eq!(calc.session().result(), Some(-2.0));
}

#[test]
fn overflowing_vat_keeps_a_usable_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut calc = Calculator::default();
    calc.press_keys(&format!("17{}=", "0".repeat(307))).unwrap();
    let before = calc.session().clone();

    let err = calc.press(Input::Command(Command::ApplyVat)).unwrap_err();
    assert!(matches!(err, CalcError::NonFinite { .. }));
    assert_eq!(calc.session(), &before);

    let path = dir.path().join("large.json");
    calc.checkpoint().save(&path).unwrap();
    let resumed = Calculator::resume(Checkpoint::load(&path).unwrap(), Settings::default());
    assert_eq!(resumed.session().history().len(), 1);
    assert!(resumed.session().result().is_some_and(f64::is_finite));

    calc.press_keys("/2=").unwrap();
    assert!(calc.session().result().is_some_and(f64::is_finite));
}

#[test]
fn overflowing_margin_is_discarded() {
    let mut calc = Calculator::default();
    calc.press_keys(&format!("17{}=", "0".repeat(307))).unwrap();
    calc.press_keys("a900").unwrap();

    let outcome = calc.press(Input::Commit).unwrap();
    assert_eq!(outcome, Outcome::Discarded(PercentError::NonFinite));
    assert_eq!(calc.session().history().len(), 1);
    assert!(calc.session().result().is_some_and(f64::is_finite));
}
