use chrono::NaiveDate;
use validator::Validate;

use crate::SelectedRange;

#[derive(Validate)]
pub struct LectureInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub range: SelectedRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Validates a lecture form submission, including the date range the picker collected.
///
/// Range violations come back as `Error::Range` carrying the message in `locale`.
pub fn submit_lecture(
    input: LectureInput,
    today: NaiveDate,
    locale: &str,
) -> rangepick_shared::Result<Lecture> {
    input.validate()?;
    input.range.check(today).map_err(|err| {
        tracing::debug!(%err, "lecture range rejected");

        rangepick_shared::Error::Range(err.message(locale))
    })?;

    let (Some(start), Some(end)) = (input.range.start, input.range.end) else {
        rangepick_shared::bail!("range check accepted an incomplete range");
    };

    tracing::info!(title = %input.title, %start, %end, "lecture submitted");

    Ok(Lecture {
        title: input.title,
        start,
        end,
    })
}
