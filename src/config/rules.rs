//! Configuration rules checked with `Validation`, so every violation is
//! reported at once instead of stopping at the first.

use crate::config::error::ConfigViolation;
use crate::config::Config;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking one rule.
pub type RuleCheck = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Check every rule, accumulating ALL violations.
pub fn check(config: &Config) -> RuleCheck {
    let mut checks: Vec<RuleCheck> = Vec::new();

    let rate = config.vat_rate;
    checks.push(if rate.is_finite() {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::VatRateNotFinite { value: rate })
    });
    checks.push(if (0.0..=1.0).contains(&rate) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::VatRateOutOfRange { value: rate })
    });

    let labels = config.labels();
    for (field, text) in labels.fields() {
        checks.push(if text.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyLabel {
                field: field.to_string(),
            })
        } else {
            Validation::success(())
        });
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a failed check.
pub fn violations(result: RuleCheck) -> Vec<ConfigViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.into_vec(),
    }
}
