//! Adjustment guide formulas.
//!
//! Shape adjustment lists only ever carry literal values (`val 25000`).
//! Anything else is rejected with a diagnostic pointing at the offending
//! token.

use crate::errors::{GuideError, SourceContext};
use crate::types::Adjustments;

/// Parse a single `val N` formula.
pub fn parse_guide_value(name: &str, formula: &str) -> Result<f64, GuideError> {
    let ctx = SourceContext::new(name, formula);
    let mut tokens = tokenize(formula);

    let Some((op_start, op)) = tokens.next() else {
        return Err(GuideError::Empty {
            src: ctx.named_source(),
            span: (0, formula.len()).into(),
        });
    };
    if op != "val" {
        return Err(GuideError::UnsupportedOperator {
            operator: op.to_string(),
            src: ctx.named_source(),
            span: (op_start, op.len()).into(),
        });
    }

    let Some((num_start, num)) = tokens.next() else {
        return Err(GuideError::MissingOperand {
            src: ctx.named_source(),
            span: (op_start, op.len()).into(),
        });
    };
    let value = match num.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(GuideError::InvalidNumber {
                text: num.to_string(),
                src: ctx.named_source(),
                span: (num_start, num.len()).into(),
            });
        }
    };

    if let Some((rest_start, _)) = tokens.next() {
        return Err(GuideError::TrailingInput {
            src: ctx.named_source(),
            span: (rest_start, formula.len() - rest_start).into(),
        });
    }

    Ok(value)
}

/// Whitespace-separated tokens with their byte offsets.
fn tokenize(s: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut chars = s.char_indices();
    std::iter::from_fn(move || {
        let (start, _) = chars.find(|&(_, c)| !c.is_ascii_whitespace())?;
        let end = chars
            .find(|&(_, c)| c.is_ascii_whitespace())
            .map_or(s.len(), |(i, _)| i);
        Some((start, &s[start..end]))
    })
}

impl Adjustments {
    /// Build adjustments from `(name, formula)` guide pairs.
    pub fn from_guides<'a, I>(guides: I) -> Result<Adjustments, GuideError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut adj = Adjustments::new();
        for (name, formula) in guides {
            adj.insert(name, parse_guide_value(name, formula)?);
        }
        Ok(adj)
    }
}
