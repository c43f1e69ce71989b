use student_core::{
    InMemoryStudentRepository, MutationOutcome, Student, StudentRepository, StudentService,
    StudentUpdate,
};

fn service() -> StudentService<InMemoryStudentRepository> {
    StudentService::new(InMemoryStudentRepository::new())
}

#[test]
fn add_and_get_roundtrip() {
    let mut service = service();
    service.add(1, "Ann", 20, "CS");

    let loaded = service.get(1).unwrap();
    assert_eq!(loaded, &Student::new(1, "Ann", 20, "CS"));
}

#[test]
fn remove_missing_id_leaves_collection_unchanged() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add(Student::new(1, "Ann", 20, "CS"));
    repo.add(Student::new(2, "Bo", 22, "EE"));
    let before = repo.get_all();

    assert_eq!(repo.remove(42), 0);
    assert_eq!(repo.len(), 2);
    assert_eq!(repo.get_all(), before);
}

#[test]
fn update_with_blank_fields_changes_nothing() {
    let mut service = service();
    service.add(1, "Ann", 20, "CS");

    let blank = StudentUpdate {
        name: Some(String::new()),
        age: None,
        major: Some(String::new()),
    };
    assert!(service.update(1, &blank).is_found());
    assert!(service.update(1, &StudentUpdate::default()).is_found());

    assert_eq!(service.get(1).unwrap(), &Student::new(1, "Ann", 20, "CS"));
}

#[test]
fn update_with_subset_changes_only_those_fields() {
    let mut service = service();
    service.add(1, "Ann", 20, "CS");

    let patch = StudentUpdate {
        age: Some(21),
        major: Some("Physics".to_string()),
        ..StudentUpdate::default()
    };
    let outcome = service.update(1, &patch);

    assert_eq!(outcome, MutationOutcome::Applied { affected: 1 });
    let loaded = service.get(1).unwrap();
    assert_eq!(loaded.id(), 1);
    assert_eq!(loaded.name, "Ann");
    assert_eq!(loaded.age, 21);
    assert_eq!(loaded.major, "Physics");
}

#[test]
fn duplicate_ids_resolve_to_first_added_and_list_keeps_both() {
    let mut service = service();
    service.add(5, "First", 19, "Art");
    service.add(5, "Second", 23, "Law");

    assert_eq!(service.get(5).unwrap().name, "First");
    let all = service.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "First");
    assert_eq!(all[1].name, "Second");
}

#[test]
fn duplicate_id_update_only_touches_first_match() {
    let mut service = service();
    service.add(5, "First", 19, "Art");
    service.add(5, "Second", 23, "Law");

    let patch = StudentUpdate {
        name: Some("Renamed".to_string()),
        ..StudentUpdate::default()
    };
    assert_eq!(
        service.update(5, &patch),
        MutationOutcome::Applied { affected: 1 }
    );

    let names: Vec<String> = service.get_all().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Renamed".to_string(), "Second".to_string()]);
}

#[test]
fn delete_removes_only_matching_record() {
    let mut service = service();
    service.add(1, "Ann", 20, "CS");
    service.add(2, "Bo", 22, "EE");

    assert_eq!(service.delete(1), MutationOutcome::Applied { affected: 1 });

    let all = service.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), 2);
    assert_eq!(all[0].name, "Bo");
}

#[test]
fn delete_missing_id_reports_not_found() {
    let mut service = service();
    service.add(1, "Ann", 20, "CS");

    assert_eq!(service.delete(9), MutationOutcome::NotFound);
    assert_eq!(service.get_all().len(), 1);
}

#[test]
fn update_on_empty_collection_is_a_reported_no_op() {
    let mut service = service();
    let patch = StudentUpdate {
        name: Some("X".to_string()),
        ..StudentUpdate::default()
    };

    assert_eq!(service.update(99, &patch), MutationOutcome::NotFound);
    assert!(service.get_all().is_empty());
}

#[test]
fn get_all_returns_detached_snapshot() {
    let mut service = service();
    service.add(1, "Ann", 20, "CS");

    let mut snapshot = service.get_all();
    snapshot[0].name = "Mallory".to_string();
    snapshot.clear();

    let all = service.get_all();
    assert_eq!(all, vec![Student::new(1, "Ann", 20, "CS")]);
}
