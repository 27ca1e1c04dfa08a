//! Environment variable validation
//!
//! Invalid values never abort a run. They are reported as warnings with a
//! typo suggestion and the override is skipped.

/// Validator for one environment variable's allowed values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or describe why it was rejected
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, String>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value.trim()).ok_or_else(|| self.warning(value))
    }

    fn warning(&self, value: &str) -> String {
        let mut message = format!("Invalid {} value '{}'", self.var_name, value);
        if let Some(suggested) = suggest(value, self.valid_values) {
            message.push_str(&format!(". Did you mean '{}'?", suggested));
        }
        if !self.valid_values.is_empty() {
            message.push_str(&format!(" (valid: {})", self.valid_values.join(", ")));
        }
        message
    }
}

/// Closest candidate within two edits, ignoring exact matches
pub fn suggest<'c>(value: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let input = value.to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, levenshtein(&input, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .map(|(c, _)| c)
}

/// Levenshtein distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
