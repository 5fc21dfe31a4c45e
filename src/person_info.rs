use miette::IntoDiagnostic;
use time::macros::format_description;
use time::OffsetDateTime;

/// Identity and timing of one side (author or committer) of a commit.
///
/// Porcelain metadata keys are optional; a field the annotation output never
/// supplied is `None` and renders as an empty report field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    pub name: Option<String>,
    /// Kept verbatim from the annotation output, angle brackets included.
    pub email: Option<String>,
    pub date: Option<OffsetDateTime>,
}

impl PersonInfo {
    pub fn name_field(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    pub fn email_field(&self) -> String {
        self.email.clone().unwrap_or_default()
    }

    /// The calendar date in `month/day/year` form, with no time of day.
    ///
    /// Both the committer and author columns of the report use this form.
    pub fn date_field(&self) -> miette::Result<String> {
        match self.date {
            Some(date) => date
                .format(format_description!(
                    "[month padding:none]/[day padding:none]/[year]"
                ))
                .into_diagnostic(),
            None => Ok(String::new()),
        }
    }
}
