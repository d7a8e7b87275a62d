//! Notice to a respondent in a Hindu Marriage Act petition before the
//! Family Court at Chennai.

use super::{Segment as S, Template};
use crate::model::{FieldSpec, FontState, PageSetup};

pub fn template() -> Template {
    Template {
        id: "family-court".to_string(),
        title: "Family Court Form".to_string(),
        description: "Legal documentation for family-related proceedings and petitions".to_string(),
        filename: "family_court_form.pdf".to_string(),
        page: PageSetup::default().starting_at(20.0),
        font: FontState::helvetica(12.0),
        fields: vec![
            FieldSpec::text("courtNumber", "Court Number"),
            FieldSpec::text("year", "Year"),
            FieldSpec::text("petitionerName", "Petitioner Name"),
            FieldSpec::text("respondentName", "Respondent Name"),
            FieldSpec::date("petitionDate", "Petition Date"),
            FieldSpec::text("relief", "Relief Sought"),
            FieldSpec::date("appearanceDate", "Appearance Date"),
            FieldSpec::date("filingDate", "Filing Date"),
            FieldSpec::date("givenDate", "Given Date"),
            FieldSpec::text("counselName", "Counsel Name"),
        ],
        script: vec![
            S::center(),
            S::lit("Before the"),
            S::Break,
            S::center(),
            S::blank("courtNumber"),
            S::Break,
            S::center(),
            S::lit("Family Court at Chennai"),
            S::advance(2.0),
            S::lit("O.P. No."),
            S::blank_max("courtNumber", 30.0),
            S::lit("of"),
            S::blank_max("year", 30.0),
            S::advance(2.0),
            S::center(),
            S::lit("In the matter of Hindu Marriage Act"),
            S::advance(2.0),
            S::blank_max("petitionerName", 120.0),
            S::column(130.0),
            S::lit("... Petitioner"),
            S::Break,
            S::center(),
            S::lit("Versus"),
            S::Break,
            S::blank_max("respondentName", 120.0),
            S::column(130.0),
            S::lit("...Respondent"),
            S::advance(2.0),
            S::lit("WHEREAS on the"),
            S::date("petitionDate"),
            S::lit("the above named petitioner filed a petition against the respondent for"),
            S::Break,
            S::center(),
            S::blank_max("relief", 170.0),
            S::advance(2.0),
            S::lit("You are hereby required to appear in this Court on the"),
            S::date("appearanceDate"),
            S::lit(
                "at 10.15 a.m. in the forenoon in person to answer all material questions \
                 relating to the above proceedings.",
            ),
            S::advance(2.0),
            S::lit("You are required to file a written statement in Court on or before the"),
            S::date("filingDate"),
            S::advance(2.0),
            S::lit("GIVEN under my hand and the seal of the Court, this the"),
            S::date("givenDate"),
            S::advance(2.0),
            S::center(),
            S::lit("Central Nazir"),
            S::advance(2.0),
            S::lit("This notice has been taken out by Mr."),
            S::blank("counselName"),
            S::advance(2.0),
            S::lit("Counsel for Petitioner"),
            S::right(),
            S::lit("Petitioner"),
        ],
    }
}
