use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One employee of the shift operation.
///
/// Shift 0 means "unassigned"; 1..N are the shift groups used to sort and
/// group the schedule grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub shift: u8,
    #[serde(default)]
    pub role: String,
    /// Optional monthly total-hours target, shown in the template total column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_target: Option<f64>,
}

/// The employee list, loaded from a hand-authored YAML file.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Load the roster from a YAML file (a plain list of employees).
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Roster(format!(
                "cannot read roster file {}: {}",
                path.display(),
                e
            ))
        })?;

        let employees: Vec<Employee> = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Roster(format!("invalid roster file: {}", e)))?;

        if employees.is_empty() {
            return Err(AppError::Roster("the roster has no employees".to_string()));
        }

        Ok(Self { employees })
    }

    /// Write the roster back to disk as YAML.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(&self.employees)
            .map_err(|e| AppError::Roster(format!("cannot serialize roster: {}", e)))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Starter roster written by `init`, meant to be hand-edited afterwards.
    pub fn sample() -> Self {
        Self::new(vec![
            Employee {
                id: 1,
                name: "Ivanov Ivan Ivanovich".to_string(),
                shift: 1,
                role: "Manager".to_string(),
                hours_target: Some(168.0),
            },
            Employee {
                id: 2,
                name: "Petrov Petr Petrovich".to_string(),
                shift: 2,
                role: "Operator".to_string(),
                hours_target: Some(168.0),
            },
            Employee {
                id: 3,
                name: "Sidorova Anna Mikhaylovna".to_string(),
                shift: 0,
                role: "Accountant".to_string(),
                hours_target: None,
            },
        ])
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Resolve a CLI selector: a numeric roster id, or the exact display name.
    pub fn find(&self, selector: &str) -> Option<&Employee> {
        if let Ok(id) = selector.parse::<u32>()
            && let Some(emp) = self.employees.iter().find(|e| e.id == id)
        {
            return Some(emp);
        }

        self.employees.iter().find(|e| e.name == selector)
    }

    /// Employees ordered and grouped by shift number (0 = unassigned first).
    pub fn grouped_by_shift(&self) -> Vec<(u8, Vec<&Employee>)> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by_key(|e| e.shift);

        let mut groups: Vec<(u8, Vec<&Employee>)> = Vec::new();
        for emp in sorted {
            match groups.last_mut() {
                Some((shift, members)) if *shift == emp.shift => members.push(emp),
                _ => groups.push((emp.shift, vec![emp])),
            }
        }

        groups
    }
}
