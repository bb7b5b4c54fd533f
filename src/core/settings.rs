//! Interpreter settings: the VAT rate and the label set used for history
//! entries and the display.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default VAT rate (10%).
pub const DEFAULT_VAT_RATE: f64 = 0.10;

/// Built-in label languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Korean,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "korean" | "ko" => Ok(Self::Korean),
            other => Err(format!(
                "unknown language '{other}' (expected 'english' or 'korean')"
            )),
        }
    }
}

/// Words used in history labels and the display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub title: String,
    pub margin: String,
    pub discount: String,
    pub vat: String,
    pub grand_total: String,
    pub grand_total_vat: String,
    pub mode: String,
    pub percent_prompt: String,
    pub input: String,
    pub result: String,
    pub history: String,
    pub empty_history: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            title: "Business Calculator".to_string(),
            margin: "margin".to_string(),
            discount: "discount".to_string(),
            vat: "VAT".to_string(),
            grand_total: "grand total".to_string(),
            grand_total_vat: "grand total + VAT".to_string(),
            mode: "mode".to_string(),
            percent_prompt: "enter % then Enter".to_string(),
            input: "input".to_string(),
            result: "result".to_string(),
            history: "history".to_string(),
            empty_history: "no history".to_string(),
        }
    }

    pub fn korean() -> Self {
        Self {
            title: "사장님 계산기".to_string(),
            margin: "마진".to_string(),
            discount: "할인".to_string(),
            vat: "부가세".to_string(),
            grand_total: "총합계".to_string(),
            grand_total_vat: "총합 + 부가세".to_string(),
            mode: "모드".to_string(),
            percent_prompt: "% 입력 후 Enter".to_string(),
            input: "입력".to_string(),
            result: "결과".to_string(),
            history: "계산 이력".to_string(),
            empty_history: "이력이 없습니다".to_string(),
        }
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Korean => Self::korean(),
        }
    }

    /// Every label paired with its field name.
    pub fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("title", self.title.as_str()),
            ("margin", self.margin.as_str()),
            ("discount", self.discount.as_str()),
            ("vat", self.vat.as_str()),
            ("grand_total", self.grand_total.as_str()),
            ("grand_total_vat", self.grand_total_vat.as_str()),
            ("mode", self.mode.as_str()),
            ("percent_prompt", self.percent_prompt.as_str()),
            ("input", self.input.as_str()),
            ("result", self.result.as_str()),
            ("history", self.history.as_str()),
            ("empty_history", self.empty_history.as_str()),
        ]
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

/// Everything the interpreter needs beyond the session itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Fraction added by VAT (0.10 = 10%)
    pub vat_rate: f64,
    pub labels: Labels,
}

impl Settings {
    pub fn new(vat_rate: f64, labels: Labels) -> Self {
        Self { vat_rate, labels }
    }

    /// `value` with VAT added.
    pub fn add_vat(&self, value: f64) -> f64 {
        value * (1.0 + self.vat_rate)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_VAT_RATE, Labels::english())
    }
}
