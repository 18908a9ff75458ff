use shared::{
    domain::{CalendarAnchor, Company, Semester},
    query::SortQuery,
};
use sorting::{resolve_term, sort_companies, sorted_companies, Term};

fn anchor() -> CalendarAnchor {
    CalendarAnchor::new(2023, Semester::First)
}

fn names(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.name.as_str()).collect()
}

fn roster() -> Vec<Company> {
    vec![
        Company::new("Equinor")
            .with_contact_person("Ola Nordmann")
            .with_comment("warm lead")
            .with_status(2023, Semester::First, 2)
            .with_status(2023, Semester::Second, 0),
        Company::new("bekk")
            .with_contact_person("Anna Dahl")
            .with_comment("cold")
            .with_status(2023, Semester::First, 0),
        Company::new("Aker")
            .with_contact_person("Ola Nordmann")
            .with_comment("warm lead"),
        Company::new("Cognite")
            .with_contact_person("Zara Berg")
            .with_comment("cold")
            .with_status(2023, Semester::First, 5)
            .with_status(2024, Semester::First, 1),
    ]
}

const KEYS: [&str; 8] = [
    "name",
    "sem0",
    "sem1",
    "sem2",
    "studentContact",
    "comment",
    "bogus",
    "",
];

#[test]
fn every_key_yields_a_permutation() {
    let mut expected: Vec<Company> = roster();
    expected.sort_by(|a, b| a.name.cmp(&b.name));
    for key in KEYS {
        for ascending in ["true", "false"] {
            let mut sorted = sorted_companies(&roster(), &SortQuery::new(key, ascending), anchor());
            assert_eq!(sorted.len(), expected.len(), "{key} {ascending}");
            sorted.sort_by(|a, b| a.name.cmp(&b.name));
            assert_eq!(sorted, expected, "{key} {ascending}");
        }
    }
}

#[test]
fn unknown_key_matches_name_ascending() {
    let by_name = sorted_companies(&roster(), &SortQuery::new("name", "true"), anchor());
    let bogus = sorted_companies(&roster(), &SortQuery::new("bogus", "true"), anchor());
    let bogus_descending = sorted_companies(&roster(), &SortQuery::new("bogus", "false"), anchor());
    assert_eq!(names(&bogus), names(&by_name));
    assert_eq!(names(&bogus_descending), names(&by_name));
    assert_eq!(names(&by_name), ["Aker", "bekk", "Cognite", "Equinor"]);
}

#[test]
fn name_descending_reverses_collated_order() {
    let sorted = sorted_companies(&roster(), &SortQuery::new("name", "false"), anchor());
    assert_eq!(names(&sorted), ["Equinor", "Cognite", "bekk", "Aker"]);
}

#[test]
fn missing_status_sorts_after_recorded_status_when_ascending() {
    let sorted = sorted_companies(&roster(), &SortQuery::new("sem0", "true"), anchor());
    assert_eq!(names(&sorted), ["bekk", "Equinor", "Cognite", "Aker"]);
}

#[test]
fn missing_status_sorts_first_when_descending() {
    let sorted = sorted_companies(&roster(), &SortQuery::new("sem0", "false"), anchor());
    assert_eq!(names(&sorted), ["Aker", "Cognite", "Equinor", "bekk"]);
}

#[test]
fn sentinel_ties_resolve_by_ascending_name() {
    // sem1 at anchor 2023/0 is 2023/1: only Equinor has a record there.
    let ascending = sorted_companies(&roster(), &SortQuery::new("sem1", "true"), anchor());
    assert_eq!(names(&ascending), ["Equinor", "Aker", "bekk", "Cognite"]);
    let descending = sorted_companies(&roster(), &SortQuery::new("sem1", "false"), anchor());
    assert_eq!(names(&descending), ["Aker", "bekk", "Cognite", "Equinor"]);
}

#[test]
fn second_semester_anchor_reads_next_year_columns() {
    let anchor = CalendarAnchor::new(2023, Semester::Second);
    assert_eq!(
        resolve_term(shared::domain::StatusColumn::Sem1, anchor),
        Term::new(2024, Semester::First)
    );
    let sorted = sorted_companies(&roster(), &SortQuery::new("sem1", "true"), anchor);
    assert_eq!(names(&sorted), ["Cognite", "Aker", "bekk", "Equinor"]);
}

#[test]
fn contact_person_compared_by_full_name() {
    let sorted = sorted_companies(&roster(), &SortQuery::new("studentContact", "true"), anchor());
    assert_eq!(names(&sorted), ["bekk", "Aker", "Equinor", "Cognite"]);
}

// Documented behavior: the name tie-break stays ascending even when the primary
// direction is descending. Kept as observed, not asserted to be the right UX.
#[test]
fn direction_flip_keeps_tie_break_ascending() {
    let ascending = sorted_companies(&roster(), &SortQuery::new("studentContact", "true"), anchor());
    let descending =
        sorted_companies(&roster(), &SortQuery::new("studentContact", "false"), anchor());
    assert_eq!(names(&ascending), ["bekk", "Aker", "Equinor", "Cognite"]);
    assert_eq!(names(&descending), ["Cognite", "Aker", "Equinor", "bekk"]);

    let comments = sorted_companies(&roster(), &SortQuery::new("comment", "false"), anchor());
    assert_eq!(names(&comments), ["Aker", "Equinor", "bekk", "Cognite"]);
}

#[test]
fn identical_names_keep_input_order() {
    let first = Company::new("Twin").with_comment("b").with_status(2023, Semester::First, 1);
    let second = Company::new("Twin").with_comment("a").with_status(2023, Semester::First, 1);
    let mut roster = vec![first.clone(), second.clone()];
    sort_companies(&mut roster, &SortQuery::new("sem0", "true"), anchor());
    assert_eq!(roster, [first.clone(), second.clone()]);

    let mut reversed = vec![second.clone(), first.clone()];
    sort_companies(&mut reversed, &SortQuery::new("sem0", "false"), anchor());
    assert_eq!(reversed, [second, first]);
}

#[test]
fn sorts_roster_decoded_from_json() {
    let raw = r#"[
        { "name": "Kongsberg", "studentContact": null, "adminComment": "", "semesterStatuses": [] },
        { "name": "DNB", "studentContact": { "fullName": "Per Hansen" }, "adminComment": "x",
          "semesterStatuses": [{ "year": 2024, "semester": 0, "contactedStatus": 3 }] }
    ]"#;
    let mut roster: Vec<Company> = serde_json::from_str(raw).expect("roster");
    let query = SortQuery::from_query_string("sortBy=sem2&ascending=true");
    sort_companies(&mut roster, &query, anchor());
    assert_eq!(names(&roster), ["DNB", "Kongsberg"]);
}
