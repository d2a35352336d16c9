use chrono::NaiveDate;
use serde_json::json;
use university_portal::intents::ReviewVerdict;
use university_portal::models::ContentType;
use university_portal::{builtin_dataset, Intent, IntentError, IntentLog, IntentSink};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

#[test]
fn intents_serialize_as_tagged_json() {
    let data = builtin_dataset();

    let assign = Intent::assign_faculty(&data, "8", "1").unwrap();
    assert_eq!(
        serde_json::to_value(&assign).unwrap(),
        json!({ "intent": "assign_faculty", "courseId": "8", "facultyId": "1" })
    );

    let review = Intent::review_content(
        &data,
        "2",
        ReviewVerdict::NeedsRevision,
        " more examples ",
        "admin1",
        day(),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&review).unwrap(),
        json!({
            "intent": "review_content",
            "contentId": "2",
            "status": "needs_revision",
            "comments": "more examples",
            "reviewedBy": "admin1",
            "reviewedAt": "2024-03-04"
        })
    );

    let submit =
        Intent::submit_content(&data, "1", "Graphs", "", ContentType::Notes, "2", day()).unwrap();
    let value = serde_json::to_value(&submit).unwrap();
    assert_eq!(value["type"], "notes");
    assert_eq!(value["approvalStatus"], "pending");
    assert_eq!(value["submittedAt"], "2024-03-04");
}

#[test]
fn invalid_actions_are_refused() {
    let data = builtin_dataset();

    assert_eq!(
        Intent::remove_faculty(&data, "8"),
        Err(IntentError::Invalid("CS501 has no faculty assigned.".into()))
    );
    assert_eq!(
        Intent::bulk_assign(&data, "3", &[]),
        Err(IntentError::MissingField("Course selection"))
    );
    assert_eq!(
        Intent::submit_content(&data, "2", "Notes", "", ContentType::Notes, "1", day()),
        Err(IntentError::Invalid("You do not teach CS301.".into()))
    );
    assert!(matches!(
        Intent::add_programme("Physics", "Science", 7),
        Err(IntentError::Invalid(_))
    ));
    assert_eq!(
        Intent::review_content(&data, "99", ReviewVerdict::Approved, "", "admin1", day()),
        Err(IntentError::UnknownReference {
            kind: "content",
            id: "99".into()
        })
    );
}

#[test]
fn assignment_intents_update_a_working_copy() {
    let mut data = builtin_dataset();

    let bulk = Intent::bulk_assign(&data, "3", &["8".to_string(), "5".to_string()]).unwrap();
    assert_eq!(bulk.apply_assignment(&mut data.courses), 1);
    assert_eq!(data.courses[7].faculty_id.as_deref(), Some("3"));

    let remove = Intent::remove_faculty(&data, "8").unwrap();
    assert_eq!(remove.apply_assignment(&mut data.courses), 1);
    assert!(!data.courses[7].is_assigned());

    let programme = Intent::add_programme("Physics", "Science", 4).unwrap();
    assert_eq!(programme.apply_assignment(&mut data.courses), 0);
    assert_eq!(data, {
        let mut expected = builtin_dataset();
        expected.courses[7].faculty_id = None;
        expected
    });
}

#[test]
fn intent_log_keeps_history() {
    let data = builtin_dataset();
    let mut log = IntentLog::new();
    log.dispatch(Intent::assign_faculty(&data, "8", "1").unwrap()).unwrap();
    log.dispatch(Intent::add_programme("Physics", "Science", 4).unwrap()).unwrap();

    assert_eq!(log.history().len(), 2);
    assert_eq!(log.history()[1].summary(), "Add programme Physics");
}
