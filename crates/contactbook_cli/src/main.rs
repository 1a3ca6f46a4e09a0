//! Contact book demo entry point.
//!
//! # Responsibility
//! - Replay a fixed add/find/update/delete/search scenario against the
//!   shared contact store and print every result.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use contactbook_core::{
    shared_contacts, Contact, ContactGroup, ContactRepository, LogConfig, RepoError, Repository,
};
use log::{error, info};

const RENAMED_CONTACT_ID: i32 = 2;
const SEARCH_QUERY: &str = "Alim";

fn main() {
    let config = LogConfig::from_env();
    if let Err(err) = config.init() {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        contactbook_core::core_version()
    );

    let mut repo = match shared_contacts().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if let Err(err) = run(&mut repo) {
        error!("event=cli_run module=cli status=error error={err}");
        println!("{err}");
    }

    repo.release();
}

fn run(repo: &mut ContactRepository) -> Result<(), RepoError> {
    let birth_date = NaiveDate::from_ymd_opt(1980, 1, 1);
    let mut new_contact = Contact::with_details(9, "0123456", "Abdul")
        .with_last_name("Alim")
        .with_group(ContactGroup::Work);
    new_contact.birth_date = birth_date;
    repo.add(new_contact)?;

    let mut contact = repo
        .find_by_id(RENAMED_CONTACT_ID)
        .cloned()
        .ok_or(RepoError::NotFound(RENAMED_CONTACT_ID))?;
    contact.first_name = Some("updated name".to_string());
    repo.update(contact.clone())?;
    println!("contact {RENAMED_CONTACT_ID} updated successfully");
    println!("{contact}");

    if repo.delete(&contact) {
        println!("contact {RENAMED_CONTACT_ID} deleted successfully");
    }

    let hits = repo.search(SEARCH_QUERY);
    println!();
    println!("Total Contacts {}", hits.len());
    println!("----------------------------------");
    for hit in hits {
        println!("{hit}");
    }

    Ok(())
}
