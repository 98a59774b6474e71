use super::*;

#[test]
fn envelope_tolerates_missing_fields() {
    let env: Envelope<Project> = serde_json::from_str("{}").expect("envelope");
    assert_eq!(env.status, 0);
    assert!(env.message.is_empty());
    assert!(env.data.is_none());
}

#[test]
fn envelope_status_helpers() {
    let env: Envelope<()> = Envelope { status: 201, message: String::new(), data: None };
    assert!(env.is_success());
    assert!(!env.is_status(200));
}

#[test]
fn client_reads_type_as_category() {
    let raw = serde_json::json!({
        "id": "c-1",
        "name": "Ada",
        "email": "ada@example.com",
        "type": "corporate",
        "status": "inactive"
    });
    let client: Client = serde_json::from_value(raw).expect("client");
    assert_eq!(client.category, "corporate");
    assert_eq!(client.status, ClientStatus::Inactive);
    assert!(client.phone.is_empty());
    assert!(client.company.is_none());
}

#[test]
fn client_page_accepts_users_alias() {
    let raw = serde_json::json!({ "users": [], "totalPages": 4 });
    let page: ClientPage = serde_json::from_value(raw).expect("page");
    assert_eq!(page.total_pages, 4);
}

#[test]
fn client_patch_never_serializes_password() {
    let patch = ClientPatch {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        category: "individual".to_owned(),
        company: None,
        status: ClientStatus::Active,
    };
    let value = serde_json::to_value(&patch).expect("json");
    assert!(value.get("password").is_none());
    assert_eq!(value["type"], "individual");
}

#[test]
fn project_defaults_nested_collections() {
    let raw = serde_json::json!({ "id": "p-1", "name": "Bridge" });
    let project: Project = serde_json::from_value(raw).expect("project");
    assert!(project.finance_documents.is_empty());
    assert!(project.milestones.is_empty());
    assert_eq!(project.status, ProjectStatus::Pending);
}

#[test]
fn approval_status_tolerates_unknown_values() {
    let raw = serde_json::json!({ "id": "d-1", "approvalStatus": "archived" });
    let doc: ReportDocument = serde_json::from_value(raw).expect("doc");
    assert_eq!(doc.approval_status, ApprovalStatus::Unknown);
}

#[test]
fn milestone_patch_serializes_cleared_timestamp_as_null() {
    let patch = MilestonePatch {
        title: "Foundation".to_owned(),
        description: String::new(),
        status: MilestoneStatus::Pending,
        completed_at: None,
    };
    let value = serde_json::to_value(&patch).expect("json");
    assert_eq!(value["status"], "pending");
    assert!(value["completedAt"].is_null());
}

#[test]
fn execution_patch_uses_camel_case() {
    let patch = ExecutionPatch { physical_execution: 40.0, financial_execution: 25.0 };
    assert_eq!(
        serde_json::to_value(patch).expect("json"),
        serde_json::json!({ "physicalExecution": 40.0, "financialExecution": 25.0 })
    );
}
