use rust_decimal::Decimal;

use studio_crm::domain::property::Property;
use studio_crm::domain::service::Service;
use studio_crm::domain::subject::Subject;
use studio_crm::domain::types::{ClientId, PropertyId, ServiceId, SubjectId, WorkId};
use studio_crm::domain::work::{UnpaidWork, WorkPaymentStatus};
use studio_crm::drafts::DraftError;
use studio_crm::drafts::payment::PaymentDraft;
use studio_crm::drafts::work::{ReferenceContext, WorkDraft};

fn client_id(value: i32) -> ClientId {
    ClientId::new(value).expect("valid client id")
}

fn subject(id: i32) -> Subject {
    Subject {
        id: SubjectId::new(id).expect("valid subject id"),
        client_id: client_id(1),
        first_name: "Mario".to_string(),
        last_name: "Rossi".to_string(),
        tax_id: None,
    }
}

fn property(id: i32, city: Option<&str>) -> Property {
    Property {
        id: PropertyId::new(id).expect("valid property id"),
        subject_id: SubjectId::new(1).expect("valid subject id"),
        address: "Via Garibaldi 12".to_string(),
        city: city.map(str::to_string),
    }
}

fn service(id: i32, amount: i64) -> Service {
    Service {
        id: ServiceId::new(id).expect("valid service id"),
        name: "Progetto architettonico".to_string(),
        amount: Decimal::from(amount),
    }
}

fn unpaid(id: i32, amount: i64, paid: i64) -> UnpaidWork {
    UnpaidWork {
        id: WorkId::new(id).expect("valid work id"),
        description: format!("Pratica #{id}"),
        amount: Decimal::from(amount),
        amount_paid: Decimal::from(paid),
        payment_status: if paid == 0 {
            WorkPaymentStatus::Unpaid
        } else {
            WorkPaymentStatus::PartiallyPaid
        },
    }
}

#[test]
fn completing_the_triple_derives_the_description() {
    let subjects = vec![subject(1)];
    let properties = vec![property(1, Some("Torino"))];
    let services = vec![service(1, 1500)];
    let refs = ReferenceContext::new(&subjects, &properties, &services);

    let mut draft = WorkDraft::new();
    draft.select_client(client_id(1)).expect("create mode");
    draft
        .select_subject(subjects[0].id)
        .expect("create mode");
    draft.select_property(properties[0].id, &refs);
    assert!(draft.description.is_empty());

    draft.select_service(services[0].id, &refs);
    assert_eq!(
        draft.description.as_str(),
        "Rossi Mario - Progetto architettonico presso Via Garibaldi 12, Torino"
    );
    assert_eq!(draft.amount, Decimal::from(1500));

    // Re-selecting the same service yields the same string.
    let before = draft.description.clone();
    draft.select_service(services[0].id, &refs);
    assert_eq!(draft.description, before);
}

#[test]
fn missing_lookup_skips_derivation_but_keeps_the_selection() {
    let refs = ReferenceContext::new(&[], &[], &[]);

    let mut draft = WorkDraft::new();
    draft.select_client(client_id(1)).expect("create mode");
    draft
        .select_subject(SubjectId::new(1).expect("valid subject id"))
        .expect("create mode");
    draft.select_property(PropertyId::new(1).expect("valid property id"), &refs);
    draft.select_service(ServiceId::new(1).expect("valid service id"), &refs);

    assert!(draft.service_id.is_some());
    assert_eq!(draft.amount, Decimal::ZERO);
    assert!(draft.description.is_empty());
}

#[test]
fn client_change_resets_every_dependent_selection() {
    let subjects = vec![subject(1)];
    let properties = vec![property(1, None)];
    let services = vec![service(1, 250)];
    let refs = ReferenceContext::new(&subjects, &properties, &services);

    let mut draft = WorkDraft::new();
    draft.select_client(client_id(1)).expect("create mode");
    draft.select_subject(subjects[0].id).expect("create mode");
    draft.select_property(properties[0].id, &refs);
    draft.select_service(services[0].id, &refs);
    assert!(!draft.description.is_empty());

    draft.select_client(client_id(2)).expect("create mode");
    assert_eq!(draft.subject_id, None);
    assert_eq!(draft.property_id, None);
    assert_eq!(draft.service_id, None);
    assert!(draft.description.is_empty());
    assert_eq!(draft.amount, Decimal::ZERO);
}

#[test]
fn subject_change_resets_the_property_and_derived_description() {
    let subjects = vec![subject(1), subject(2)];
    let properties = vec![property(1, Some("Milano"))];
    let services = vec![service(1, 250)];
    let refs = ReferenceContext::new(&subjects, &properties, &services);

    let mut draft = WorkDraft::new();
    draft.select_client(client_id(1)).expect("create mode");
    draft.select_subject(subjects[0].id).expect("create mode");
    draft.select_property(properties[0].id, &refs);
    draft.select_service(services[0].id, &refs);
    assert!(!draft.description.is_empty());

    draft.select_subject(subjects[1].id).expect("create mode");
    assert_eq!(draft.property_id, None);
    assert!(draft.description.is_empty());
}

#[test]
fn subject_change_preserves_a_manual_description() {
    let mut draft = WorkDraft::new();
    draft.select_client(client_id(1)).expect("create mode");
    draft
        .select_subject(SubjectId::new(1).expect("valid subject id"))
        .expect("create mode");
    draft.edit_description("accordo verbale con il cliente");

    draft
        .select_subject(SubjectId::new(2).expect("valid subject id"))
        .expect("create mode");
    assert_eq!(draft.description.as_str(), "accordo verbale con il cliente");
    assert!(draft.description.is_user_edited());
}

#[test]
fn editing_an_existing_work_locks_client_and_subject() {
    let subjects = vec![subject(1)];
    let properties = vec![property(7, Some("Milano"))];
    let services = vec![service(3, 400)];
    let refs = ReferenceContext::new(&subjects, &properties, &services);

    let mut draft = WorkDraft {
        id: Some(WorkId::new(10).expect("valid work id")),
        client_id: Some(client_id(1)),
        subject_id: Some(subjects[0].id),
        ..WorkDraft::new()
    };

    assert_eq!(
        draft.select_client(client_id(2)),
        Err(DraftError::SelectionLocked)
    );
    assert_eq!(
        draft.select_subject(SubjectId::new(2).expect("valid subject id")),
        Err(DraftError::SelectionLocked)
    );

    // Property and service remain editable and re-derive as usual.
    draft.select_property(properties[0].id, &refs);
    draft.select_service(services[0].id, &refs);
    assert_eq!(draft.amount, Decimal::from(400));
    assert_eq!(
        draft.description.as_str(),
        "Rossi Mario - Progetto architettonico presso Via Garibaldi 12, Milano"
    );
}

#[test]
fn toggling_a_partially_paid_work_defaults_to_the_outstanding_balance() {
    let work = unpaid(1, 1000, 300);

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&work);

    let selected = draft.selected_works();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].amount_paid, Decimal::from(700));
    assert_eq!(selected[0].amount_to_pay, Decimal::from(700));
    assert_eq!(draft.total_amount(), Decimal::from(700));
}

#[test]
fn fully_paid_work_contributes_zero() {
    let first = unpaid(1, 500, 0);
    let second = unpaid(2, 200, 200);

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&first);
    draft.toggle_work(&second);

    assert_eq!(draft.selected_works().len(), 2);
    assert_eq!(draft.total_amount(), Decimal::from(500));
}

#[test]
fn double_toggle_reverts_membership() {
    let first = unpaid(1, 500, 0);
    let second = unpaid(2, 300, 0);

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&first);

    let members_before: Vec<_> = draft
        .selected_works()
        .iter()
        .map(|sw| sw.work_id)
        .collect();

    draft.toggle_work(&second);
    draft
        .set_amount_paid(second.id, Decimal::from(100))
        .expect("selected work");
    draft.toggle_work(&second);

    let members_after: Vec<_> = draft
        .selected_works()
        .iter()
        .map(|sw| sw.work_id)
        .collect();
    assert_eq!(members_after, members_before);
    assert_eq!(draft.total_amount(), Decimal::from(500));
}

#[test]
fn manual_allocation_updates_the_remainder_and_total() {
    let work = unpaid(1, 1000, 0);

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&work);
    assert_eq!(draft.total_amount(), Decimal::from(1000));

    draft
        .set_amount_paid(work.id, Decimal::from(150))
        .expect("selected work");

    let selected = &draft.selected_works()[0];
    assert_eq!(selected.amount_paid, Decimal::from(150));
    assert_eq!(selected.amount_to_pay, Decimal::from(850));
    assert_eq!(draft.total_amount(), Decimal::from(150));
}

#[test]
fn manual_allocation_is_based_on_the_outstanding_balance() {
    let work = unpaid(1, 1000, 300);

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&work);
    draft
        .set_amount_paid(work.id, Decimal::from(200))
        .expect("selected work");

    let selected = &draft.selected_works()[0];
    assert_eq!(selected.amount_to_pay, Decimal::from(500));
}

#[test]
fn invalid_allocations_are_rejected_and_state_is_retained() {
    let work = unpaid(1, 1000, 0);
    let other = WorkId::new(99).expect("valid work id");

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&work);

    assert_eq!(
        draft.set_amount_paid(work.id, Decimal::from(-1)),
        Err(DraftError::NegativeAmount)
    );
    assert_eq!(
        draft.set_amount_paid(other, Decimal::from(10)),
        Err(DraftError::NotSelected(other))
    );

    assert_eq!(draft.selected_works()[0].amount_paid, Decimal::from(1000));
    assert_eq!(draft.total_amount(), Decimal::from(1000));
}

#[test]
fn switching_client_clears_the_selection() {
    let work = unpaid(1, 500, 0);

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));
    draft.toggle_work(&work);
    assert!(!draft.selected_works().is_empty());

    draft.select_client(client_id(2));
    assert!(draft.selected_works().is_empty());
    assert_eq!(draft.total_amount(), Decimal::ZERO);
}

#[test]
fn total_always_equals_the_sum_of_allocations() {
    let works = [unpaid(1, 400, 0), unpaid(2, 600, 100), unpaid(3, 50, 0)];

    let mut draft = PaymentDraft::new();
    draft.select_client(client_id(1));

    for work in &works {
        draft.toggle_work(work);
        let expected: Decimal = draft
            .selected_works()
            .iter()
            .map(|sw| sw.amount_paid)
            .sum();
        assert_eq!(draft.total_amount(), expected);
    }

    draft
        .set_amount_paid(works[1].id, Decimal::from(250))
        .expect("selected work");
    let expected: Decimal = draft
        .selected_works()
        .iter()
        .map(|sw| sw.amount_paid)
        .sum();
    assert_eq!(draft.total_amount(), expected);
}
