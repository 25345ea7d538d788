/// Which text field is being edited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
  Db,
  Percent,
  Address,
}

impl EditField {
  pub fn label(&self) -> &'static str {
    match self {
      EditField::Db => "dB",
      EditField::Percent => "%",
      EditField::Address => "IP",
    }
  }
}

/// Parse a decibel entry such as `-30.5`; rejects NaN and infinities
pub fn parse_db(input: &str) -> Option<f64> {
  input
    .trim()
    .parse::<f64>()
    .ok()
    .filter(|db| db.is_finite())
}

/// Parse a whole-number percent entry
pub fn parse_percent(input: &str) -> Option<i32> {
  input.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_db() {
    assert_eq!(parse_db("-30.5"), Some(-30.5));
    assert_eq!(parse_db(" 0 "), Some(0.0));
    assert_eq!(parse_db("-80"), Some(-80.0));
    assert_eq!(parse_db("loud"), None);
    assert_eq!(parse_db(""), None);
    assert_eq!(parse_db("NaN"), None);
    assert_eq!(parse_db("inf"), None);
  }

  #[test]
  fn test_parse_percent() {
    assert_eq!(parse_percent("62"), Some(62));
    assert_eq!(parse_percent(" 100\n"), Some(100));
    assert_eq!(parse_percent("-4"), Some(-4));
    assert_eq!(parse_percent("50.5"), None);
    assert_eq!(parse_percent("half"), None);
  }

  #[test]
  fn test_labels() {
    assert_eq!(EditField::Db.label(), "dB");
    assert_eq!(EditField::Percent.label(), "%");
    assert_eq!(EditField::Address.label(), "IP");
  }
}
