//! Deterministic output-file naming for exported artifacts.
//!
//! Re-running an export with identical employee data must produce
//! byte-identical file names, so every rule here is a pure function of
//! the roster contents.

use crate::card::CardSide;
use crate::employee::Employee;

/// Collapse whitespace runs in a display name to single underscores.
pub fn underscored(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// PNG artifact name: `{name}_{employeeId}_{front|back}.png`.
pub fn png_file_name(employee: &Employee, side: CardSide) -> String {
    format!(
        "{}_{}_{}.png",
        underscored(&employee.name),
        employee.employee_id,
        side.as_str()
    )
}

/// Individual-PDF artifact name: `{name}_{employeeId}.pdf`.
pub fn pdf_file_name(employee: &Employee) -> String {
    format!(
        "{}_{}.pdf",
        underscored(&employee.name),
        employee.employee_id
    )
}

/// Combined-PDF artifact name: `{organization}_All_ID_Cards.pdf`.
pub fn combined_pdf_file_name(organization: &str) -> String {
    format!("{}_All_ID_Cards.pdf", underscored(organization))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Employee {
        Employee {
            id: "1".to_string(),
            name: "Ada Lovelace".to_string(),
            role: "Engineer".to_string(),
            employee_id: "E001".to_string(),
            location: "Tokyo".to_string(),
            photo: None,
            department: None,
            email: None,
            phone: None,
            join_date: None,
            availability: None,
            bio: None,
            skills: vec![],
        }
    }

    #[test]
    fn png_names_follow_the_contract() {
        assert_eq!(
            png_file_name(&ada(), CardSide::Front),
            "Ada_Lovelace_E001_front.png"
        );
        assert_eq!(
            png_file_name(&ada(), CardSide::Back),
            "Ada_Lovelace_E001_back.png"
        );
    }

    #[test]
    fn pdf_names_follow_the_contract() {
        assert_eq!(pdf_file_name(&ada()), "Ada_Lovelace_E001.pdf");
        assert_eq!(
            combined_pdf_file_name("TOMO Academy"),
            "TOMO_Academy_All_ID_Cards.pdf"
        );
    }

    #[test]
    fn whitespace_runs_collapse_to_single_underscores() {
        assert_eq!(underscored("  Grace   Brewster Hopper "), "Grace_Brewster_Hopper");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn underscored_names_never_contain_whitespace(name in "\\PC{0,40}") {
                let out = underscored(&name);
                prop_assert!(!out.contains(char::is_whitespace));
            }

            #[test]
            fn initials_are_short_and_uppercase(name in "[a-z ]{0,40}") {
                let mut e = ada();
                e.name = name;
                let initials = e.initials();
                prop_assert!(initials.chars().count() <= 2);
                prop_assert!(initials.chars().all(|c| c.is_uppercase()));
            }
        }
    }
}
