//! Assignment-tag section headers.
//!
//! A run of consecutive fields sharing an assignment tag is introduced by one
//! header. Headers only appear when a subform mixes at least two distinct
//! non-empty tags; a subform with a single tag exposes it through
//! [`HeaderPlan::leading`] instead.

use std::collections::BTreeSet;

use subform_model::{Subform, TagKind};

/// Where headers go for one subform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderPlan {
    distinct: usize,
    leading: Option<String>,
    before: Vec<Option<String>>,
}

impl HeaderPlan {
    /// Number of distinct non-empty tags.
    pub fn distinct_tags(&self) -> usize {
        self.distinct
    }

    /// True when per-field headers are in effect.
    pub fn is_mixed(&self) -> bool {
        self.distinct >= 2
    }

    /// The only tag of a single-tag subform.
    pub fn leading(&self) -> Option<&str> {
        self.leading.as_deref()
    }

    /// Tag of the header to insert before field `index`, if any.
    pub fn header_before(&self, index: usize) -> Option<&str> {
        self.before.get(index).and_then(Option::as_deref)
    }

    /// Number of per-field headers.
    pub fn header_count(&self) -> usize {
        self.before.iter().filter(|tag| tag.is_some()).count()
    }
}

/// Plan headers for an ordered list of tags.
///
/// A header precedes a field when tags are mixed, the field's tag is
/// non-empty, and it differs from the previous field's raw tag. The previous
/// tag is carried even when empty, so `[A, "", A]` heads both `A` runs.
pub fn plan_headers<'a, I>(tags: I) -> HeaderPlan
where
    I: IntoIterator<Item = &'a str>,
{
    let tags: Vec<&str> = tags.into_iter().collect();
    let distinct: BTreeSet<&str> = tags.iter().copied().filter(|tag| !tag.is_empty()).collect();
    let mixed = distinct.len() >= 2;

    let (before, _) = tags.iter().fold(
        (Vec::with_capacity(tags.len()), None::<&str>),
        |(mut before, previous), &tag| {
            let starts_run = mixed && !tag.is_empty() && previous != Some(tag);
            before.push(starts_run.then(|| tag.to_string()));
            (before, Some(tag))
        },
    );
    let leading = match distinct.len() {
        1 => distinct.first().map(|tag| (*tag).to_string()),
        _ => None,
    };

    HeaderPlan {
        distinct: distinct.len(),
        leading,
        before,
    }
}

/// Plan headers for a subform using the given tag column.
pub fn plan_for(subform: &Subform, kind: TagKind) -> HeaderPlan {
    plan_headers(
        subform
            .fields()
            .iter()
            .map(|field| field.assignment_tag(kind).trim()),
    )
}
