use dfs_standards::SALARY_CAP;

/// Digits grouped in threes with commas, e.g. `50,500`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn check(total_salary: i64) -> Vec<String> {
    if total_salary > SALARY_CAP {
        vec![format!(
            "Salary cap exceeded ({}).",
            group_thousands(total_salary)
        )]
    } else {
        Vec::new()
    }
}
