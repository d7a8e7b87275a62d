//! Affidavit of service: the clerk or counsel swears that notice was sent to
//! the respondent and records what became of it.

use super::{Segment as S, Template};
use crate::model::{FieldSpec, FontState, FontStyle, PageSetup};

pub fn template() -> Template {
    Template {
        id: "affidavit".to_string(),
        title: "Affidavit of Service".to_string(),
        description: "Legal document certifying the delivery of court papers".to_string(),
        filename: "affidavit_of_service.pdf".to_string(),
        page: PageSetup::default().starting_at(30.0),
        font: FontState::helvetica(12.0),
        fields: vec![
            FieldSpec::text("courtName", "Court Name").with_default("Chennai"),
            FieldSpec::text("iaNumber", "I.A. Number"),
            FieldSpec::text("iaYear", "I.A. Year"),
            FieldSpec::text("osNumber", "O.S. Number"),
            FieldSpec::text("osYear", "O.S. Year"),
            FieldSpec::text("petitionerName", "Petitioner/Applicant/Plaintiff Name"),
            FieldSpec::text("respondentName", "Respondent/Defendant Name"),
            FieldSpec::text("affiantName", "Affiant's Name"),
            FieldSpec::text("affiantFatherName", "Affiant's Father's Name"),
            FieldSpec::number("affiantAge", "Affiant's Age"),
            FieldSpec::text("affiantAddress", "Affiant's Address"),
            FieldSpec::text("returnableDate", "Returnable Date (Day Month)"),
            FieldSpec::date("affirmationDate", "Affirmation Date"),
            FieldSpec::text("advocateName", "Advocate Details").with_default("Advocate, Chennai"),
        ],
        script: vec![
            S::style(FontStyle::Bold),
            S::lit("In the Court of"),
            S::Break,
            S::column(25.0),
            S::blank_max("courtName", 150.0),
            S::advance(2.0),
            S::style(FontStyle::Normal),
            S::lit("I.A. No."),
            S::blank_max("iaNumber", 50.0),
            S::column(80.0),
            S::lit("of 20"),
            S::blank_max("iaYear", 30.0),
            S::Break,
            S::column(45.0),
            S::lit("In"),
            S::Break,
            S::lit("O.S. No."),
            S::blank_max("osNumber", 50.0),
            S::column(80.0),
            S::lit("of 20"),
            S::blank_max("osYear", 30.0),
            S::advance(2.0),
            S::Rule,
            S::Break,
            S::blank_max("petitionerName", 90.0),
            S::right(),
            S::lit("... Petitioner / Applicant / Plaintiff"),
            S::Break,
            S::style(FontStyle::Bold),
            S::center(),
            S::lit("Versus"),
            S::Break,
            S::style(FontStyle::Normal),
            S::blank_max("respondentName", 90.0),
            S::right(),
            S::lit("... Respondent / Defendant"),
            S::advance(2.0),
            S::font(FontStyle::Bold, 14.0),
            S::center(),
            S::lit("Affidavit of Service"),
            S::advance(2.0),
            S::font(FontStyle::Normal, 12.0),
            S::indent(10.0),
            S::lit("I,"),
            S::blank("affiantName"),
            S::lit(", son of"),
            S::blank("affiantFatherName"),
            S::lit(", aged about"),
            S::blank_max("affiantAge", 20.0),
            S::lit("years, residing at"),
            S::blank("affiantAddress"),
            S::lit("hereby solemnly affirm and sincerely state as follows:"),
            S::Paragraph,
            S::indent(0.0),
            S::lit(
                "1. I am the registered clerk of the Petitioner's Counsel on record / I am the \
                 Counsel on Record for the Petitioner and as such I am well aware of the facts \
                 of the case.",
            ),
            S::Paragraph,
            S::lit(
                "2. In the above Application / Petition, notice to the respondent was ordered \
                 returnable by",
            ),
            S::blank("returnableDate"),
            S::lit(
                "20__ . As per the orders of this Hon'ble Court, notice is taken out to the \
                 Respondent. The copy of the notice along with acknowledgement is enclosed \
                 herein, as proof of service.",
            ),
            S::Paragraph,
            S::lit(
                "3. The Registered cover sent to the Respondent has been returned to the sender \
                 with an endorsement that the addressee has left / has refused to receive / has \
                 not claimed.",
            ),
            S::Paragraph,
            S::lit(
                "4. This may kindly be recorded and pray this Hon'ble Court to pass \
                 further orders.",
            ),
            S::advance(2.5),
            S::lit("Solemnly affirmed at Chennai on this the"),
            S::date("affirmationDate"),
            S::Break,
            S::lit("and signed his name in my presence"),
            S::advance(2.0),
            S::column(90.0),
            S::lit("Before me"),
            S::advance(2.0),
            S::lit("_________________________"),
            S::column(70.0),
            S::blank_max("advocateName", 100.0),
            S::advance(0.5),
            S::lit("Counsel for Petitioner / Applicant / Plaintiff"),
        ],
    }
}
