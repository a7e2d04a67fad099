use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::directory::insert_employee;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::service;
use crate::ui::messages;
use crate::utils::table::Table;

/// Directory search over one whitelisted field.
pub fn handle_search(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { field, query } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let results = service::search_employees(&pool.conn, field, query)?;

        if results.is_empty() {
            println!("No employees match '{query}' in {field}.");
            return Ok(());
        }

        let mut table = Table::new(&[
            "Name", "Position", "Department", "Room", "Phone", "Email",
        ]);
        for emp in &results {
            table.add_row(vec![
                emp.full_name.clone(),
                emp.position.clone().unwrap_or_default(),
                emp.department.clone().unwrap_or_default(),
                emp.room.clone().unwrap_or_default(),
                emp.internal_phone.clone().unwrap_or_default(),
                emp.email.clone().unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());
        println!("\n{} employee(s) found", results.len());
    }
    Ok(())
}

pub fn handle_departments(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let departments = service::list_departments(&pool.conn)?;
    if departments.is_empty() {
        println!("No departments recorded.");
    }
    for dep in departments {
        println!("{dep}");
    }
    Ok(())
}

pub fn handle_seed(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::SeedEmployee {
        full_name,
        position,
        department,
        room,
        internal_phone,
        email,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let id = insert_employee(
            &pool.conn,
            &Employee {
                id: 0,
                full_name: full_name.clone(),
                position: position.clone(),
                department: department.clone(),
                room: room.clone(),
                internal_phone: internal_phone.clone(),
                email: email.clone(),
            },
        )?;
        messages::success(format!("Employee added with id {id}"));
    }
    Ok(())
}
