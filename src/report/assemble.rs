//! Turns grouped responses into document sections.
//!
//! The assembly logic only talks to the narrow [DocumentSink] trait, so it can
//! be exercised without a real document backend.

use crate::report::cases::{case_ids, case_study};
use crate::report::GroupedResponses;

/// Top-level heading of the generated document.
pub const REPORT_TITLE: &str = "Prim&R 18 Survey Responses";

/// Rendered in place of a free-text answer that is empty after sentinel stripping.
const EMPTY_ANSWER: &str = "None";

/// Optional styling for a paragraph.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct ParagraphStyle {
    /// Render the text in italics.
    pub italic: bool,
    /// Append a horizontal rule directly below the text.
    pub rule_after: bool,
}

impl ParagraphStyle {
    pub fn plain() -> ParagraphStyle {
        ParagraphStyle::default()
    }
}

/// The document operations the assembler needs. Level 0 is the document title
/// style; levels 1..=5 are nested heading styles.
pub trait DocumentSink {
    fn add_heading(&mut self, text: &str, level: usize);
    fn add_paragraph(&mut self, text: &str, style: ParagraphStyle);
    fn add_page_break(&mut self);
}

/// Emits the whole report: a title, then one section per case study in
/// ascending id order, each closed by a page break.
pub fn assemble_report(sink: &mut impl DocumentSink, responses: &GroupedResponses) {
    sink.add_heading(REPORT_TITLE, 0);

    for case_id in case_ids() {
        let case = case_study(case_id);
        let case_heading = format!("Case {}: {}", case_id, case.title);

        sink.add_heading(&case_heading, 2);
        sink.add_paragraph(
            case.prompt,
            ParagraphStyle {
                italic: true,
                rule_after: true,
            },
        );

        for response in responses.get(&case_id).map(Vec::as_slice).unwrap_or(&[]) {
            sink.add_heading(&case_heading, 4);
            sink.add_heading("Respondent", 5);
            sink.add_paragraph(&response.respondent_id, ParagraphStyle::plain());
            sink.add_heading("IRB Consideration", 5);
            sink.add_paragraph(&response.irb_consideration, ParagraphStyle::plain());
            sink.add_heading("Key Factors", 5);
            sink.add_paragraph(or_none(&response.key_factors), ParagraphStyle::plain());
            sink.add_heading("Ethical concerns", 5);
            sink.add_paragraph(
                or_none(&response.ethical_concerns),
                ParagraphStyle {
                    italic: false,
                    rule_after: true,
                },
            );
        }

        sink.add_page_break();
    }
}

fn or_none(answer: &str) -> &str {
    if answer.is_empty() {
        EMPTY_ANSWER
    } else {
        answer
    }
}
