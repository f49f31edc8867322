// staff-client/examples/employee_report.rs
// Lists the first page of employees with their department names

use staff_client::view::EmployeeListView;
use staff_client::{ClientConfig, DepartmentService, EmployeeService, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init_logger("info", false)?;

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to backend");

    let http = config.build_http_client()?;
    let mut view = EmployeeListView::new(
        EmployeeService::new(http.clone()),
        DepartmentService::new(http),
        config.items_per_page,
    );
    view.init().await;

    for employee in view.employees() {
        let department = employee
            .department
            .as_ref()
            .and_then(|d| d.department_name.as_deref())
            .unwrap_or("-");
        println!(
            "{:>5}  {:<30}  {}",
            employee.id.unwrap_or_default(),
            employee.full_name(),
            department
        );
    }

    Ok(())
}
