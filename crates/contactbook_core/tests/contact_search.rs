use chrono::NaiveDate;
use contactbook_core::{Contact, ContactRepository, Entity, Repository, Searchable};

fn ids(contacts: &[&Contact]) -> Vec<i32> {
    contacts.iter().map(|contact| contact.id()).collect()
}

fn sample_repo() -> ContactRepository {
    let mut repo = ContactRepository::new();
    repo.add(
        Contact::with_details(1, "0345678", "Zara")
            .with_last_name("Alim")
            .with_email("zara@work.example"),
    )
    .expect("sample contact should be valid");
    repo.add(
        Contact::with_details(12, "0987", "Abdul")
            .with_last_name("Alim")
            .with_birth_date(NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid calendar date")),
    )
    .expect("sample contact should be valid");
    repo.add(
        Contact::with_details(3, "555", "Mina")
            .with_last_name("Khan")
            .with_email("mina@home.example"),
    )
    .expect("sample contact should be valid");
    repo.add(
        Contact::with_details(4, "777", "Abdul")
            .with_last_name("Bari")
            .with_email("bari@work.example"),
    )
    .expect("sample contact should be valid");
    repo
}

#[test]
fn search_sorts_by_first_name_and_keeps_ties_in_storage_order() {
    let repo = sample_repo();
    assert_eq!(ids(&repo.search("Alim")), vec![12, 1]);
    assert_eq!(ids(&repo.search("work")), vec![4, 1]);
    assert_eq!(ids(&repo.search("Abdul")), vec![12, 4]);
}

#[test]
fn search_covers_every_field() {
    let repo = sample_repo();
    assert_eq!(ids(&repo.search("12")), vec![12]);
    assert_eq!(ids(&repo.search("Mi")), vec![3]);
    assert_eq!(ids(&repo.search("Kh")), vec![3]);
    assert_eq!(ids(&repo.search("4567")), vec![1]);
    assert_eq!(ids(&repo.search("home")), vec![3]);
    assert_eq!(ids(&repo.search("1980-01")), vec![12]);
}

#[test]
fn search_is_case_sensitive_and_prefix_only_for_names() {
    let repo = sample_repo();
    assert!(repo.search("alim").is_empty());
    assert!(repo.search("ul").is_empty());
    assert!(repo.search("han").is_empty());
}

#[test]
fn search_results_all_match_and_nothing_else_does() {
    let repo = sample_repo();
    for query in ["A", "5", "example", "1", "Z", "nothing"] {
        let hits = repo.search(query);
        assert!(hits.iter().all(|contact| contact.matches(query)));
        assert!(hits
            .windows(2)
            .all(|pair| pair[0].first_name <= pair[1].first_name));

        let expected = repo.iter().filter(|contact| contact.matches(query)).count();
        assert_eq!(hits.len(), expected, "query `{query}`");
    }
}

#[test]
fn search_skips_missing_fields_instead_of_failing() {
    let mut repo = ContactRepository::from_entities(vec![Contact::new(5), Contact::new(6)]);
    repo.add(Contact::with_details(7, "42", "Ann").with_last_name("Lee"))
        .expect("sample contact should be valid");

    assert_eq!(ids(&repo.search("Ann")), vec![7]);
    assert_eq!(ids(&repo.search("6")), vec![6]);
    assert!(repo.search("@").is_empty());
}

#[test]
fn seeded_repository_search_finds_all_seed_records() {
    let repo = ContactRepository::seeded();
    assert_eq!(ids(&repo.search("Abdur")), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(ids(&repo.search("1234")), vec![1]);
}
