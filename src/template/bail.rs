//! Petition for bail under sections 436 / 437 Cr. P.C. before the
//! Metropolitan Magistrate, Chennai.

use super::{Segment as S, Template};
use crate::model::{FieldSpec, FontState, PageSetup};

/// Paragraphs the petitioner submits, in order.
const SUBMISSIONS: [&str; 4] = [
    "The petitioner / accused submits that he is innocent of the said commission of the offence.",
    "The petitioner / accused undertakes to co-operate with the respondent in the investigation.",
    "The petitioner / accused assures that he will not tamper any of the witnesses.",
    "The petitioner / accused undertakes to appear regularly whenever and wherever he is ordered \
     to do so by this Hon'ble Court and he will abide by any other condition this Hon'ble Court \
     may be pleased to impose.",
];

pub fn template() -> Template {
    let mut script = vec![
        S::size(14.0),
        S::lit("In the Court of"),
        S::Break,
        S::size(16.0),
        S::column(40.0),
        S::underlined("Metropolitan Magistrate"),
        S::lit(", Chennai"),
        S::advance(2.0),
        S::size(12.0),
        S::lit("C.C. No."),
        S::blank("ccNumber"),
        S::lit("of 20"),
        S::blank("year"),
        S::advance(2.0),
        S::right(),
        S::blank("petitionerAccused"),
        S::lit("... Petitioner / Accused"),
        S::Break,
        S::center(),
        S::lit("Versus"),
        S::Break,
        S::lit("State by S.I. of Police,"),
        S::blank_max("policeStation", 50.0),
        S::lit(", Chennai"),
        S::right(),
        S::lit("... Respondent / Complainant"),
        S::advance(2.0),
        S::size(14.0),
        S::center(),
        S::lit("Petition for Bail u/s 436 / 437 Cr. P.C."),
        S::advance(2.0),
        S::size(12.0),
        S::lit("The petitioner / accused submits as follows:"),
        S::advance(1.5),
        S::indent(10.0),
        S::lit(
            "The petitioner / accused was arrested by the respondent for the alleged offence u/s",
        ),
        S::blank("arrestedOffenceSection"),
    ];

    for clause in SUBMISSIONS {
        script.push(S::advance(1.5));
        script.push(S::lit(clause));
    }

    script.extend([
        S::advance(2.0),
        S::indent(0.0),
        S::lit(
            "Hence it is prayed that this Hon'ble Court may be pleased to enlarge the petitioner / \
             accused on bail and thus render justice.",
        ),
        S::advance(2.0),
        S::lit("Dated at Chennai on this the"),
        S::date("petitionDate"),
        S::advance(2.0),
        S::right(),
        S::blank("counselName"),
        S::lit("Counsel for the Petitioner / Accused"),
    ]);

    Template {
        id: "bail".to_string(),
        title: "Bail Application Form".to_string(),
        description: "Application for bail in criminal proceedings".to_string(),
        filename: "bail_application_form.pdf".to_string(),
        page: PageSetup::default().starting_at(20.0),
        font: FontState::times(12.0),
        fields: vec![
            FieldSpec::text("ccNumber", "C.C. No."),
            FieldSpec::text("year", "Year"),
            FieldSpec::text("policeStation", "Police Station"),
            FieldSpec::text("petitionerAccused", "Petitioner / Accused Name"),
            FieldSpec::text("arrestedOffenceSection", "Arrested Offence u/s"),
            FieldSpec::date("petitionDate", "Dated Date"),
            FieldSpec::text("counselName", "Counsel Name"),
        ],
        script,
    }
}
