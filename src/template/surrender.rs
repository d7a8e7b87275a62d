//! Petition by an accused who voluntarily surrenders before the
//! Metropolitan Magistrate.

use super::{Segment as S, Template};
use crate::model::{FieldSpec, FontState, FontStyle, PageSetup};

pub fn template() -> Template {
    Template {
        id: "surrender".to_string(),
        title: "Surrender Petition".to_string(),
        description: "Formal application for voluntary surrender in legal proceedings".to_string(),
        filename: "surrender_petition.pdf".to_string(),
        page: PageSetup::default().starting_at(30.0),
        font: FontState::helvetica(12.0),
        fields: vec![
            FieldSpec::text("courtName", "Court Name")
                .with_default("Metropolitan Magistrate, Chennai"),
            FieldSpec::text("crlMPNumber", "Crl. M.P. No."),
            FieldSpec::text("crlMPYear", "Crl. M.P. Year"),
            FieldSpec::text("ccNumber", "C.C. No."),
            FieldSpec::text("ccYear", "C.C. Year"),
            FieldSpec::text("policeStation", "Police Station"),
            FieldSpec::text("accusedName", "Accused Name"),
            FieldSpec::text("accusedAddress", "Accused Address"),
            FieldSpec::text("crimeNumber", "Crime Number"),
            FieldSpec::text("offenceSection", "Offence Section (u/s)"),
            FieldSpec::date("petitionDate", "Petition Date"),
        ],
        script: vec![
            S::style(FontStyle::Bold),
            S::lit("In the Court of"),
            S::Break,
            S::column(30.0),
            S::blank_max("courtName", 140.0),
            S::Break,
            S::style(FontStyle::Normal),
            S::lit("Crl. M.P. No."),
            S::blank_max("crlMPNumber", 50.0),
            S::column(90.0),
            S::lit("of 20"),
            S::blank_max("crlMPYear", 30.0),
            S::Break,
            S::column(45.0),
            S::lit("in"),
            S::Break,
            S::lit("C.C. No."),
            S::blank_max("ccNumber", 50.0),
            S::column(90.0),
            S::lit("of 20"),
            S::blank_max("ccYear", 30.0),
            S::advance(2.0),
            S::blank_max("accusedName", 90.0),
            S::right(),
            S::lit("... Petitioner / Accused"),
            S::Break,
            S::style(FontStyle::Bold),
            S::center(),
            S::lit("Versus"),
            S::Break,
            S::style(FontStyle::Normal),
            S::lit("State by S.I. of Police,"),
            S::Break,
            S::blank_max("policeStation", 100.0),
            S::lit("Police Station, Chennai"),
            S::right(),
            S::lit("... Respondent / Complainant"),
            S::advance(2.0),
            S::font(FontStyle::Bold, 14.0),
            S::center(),
            S::lit("SURRENDER PETITION"),
            S::advance(2.0),
            S::font(FontStyle::Normal, 12.0),
            S::lit("The accused above named"),
            S::blank("accusedName"),
            S::lit("is a law abiding citizen and permanently residing at"),
            S::blank("accusedAddress"),
            S::lit("."),
            S::Paragraph,
            S::lit("It appears that the name of the accused has been implicated in Crime No."),
            S::blank("crimeNumber"),
            S::lit("for an offence u/s"),
            S::blank("offenceSection"),
            S::lit("."),
            S::Paragraph,
            S::lit(
                "And the accused being a law abiding citizen voluntarily surrenders before this \
                 Hon'ble Court.",
            ),
            S::Paragraph,
            S::lit(
                "Hence it is prayed that this Hon'ble Court may be pleased to accept the surrender \
                 of the accused and thus render justice.",
            ),
            S::advance(3.0),
            S::lit("Dated at Chennai on this the"),
            S::date("petitionDate"),
            S::advance(2.0),
            S::right(),
            S::lit("_________________________"),
            S::advance(0.5),
            S::right(),
            S::lit("Petitioner / Accused"),
        ],
    }
}
