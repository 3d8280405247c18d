//! SQLite-based journal storage.
//!
//! Provides persistent storage for:
//! - Daily tasks with categories, estimates and optional start times
//! - Habit definitions and per-day checks
//! - Key-value settings (day-start boundary, quote dismissal)
//! - The 365-day quote table
//!
//! Admission control lives here: category limits, habit limits and
//! title/hour validation are storage rules, not scheduler rules. The
//! scheduler receives whatever `list_tasks` returns and degrades bad
//! values on its own.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::quotes::{self, DailyQuote};
use super::data_dir;
use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::task::{Task, TaskCategory};

/// Maximum number of habits a journal may define.
pub const MAX_HABITS: u32 = 5;

/// Settings key holding the day-start boundary.
pub const DAY_START_KEY: &str = "day_start";

/// Settings key recording the last day the daily quote was dismissed.
pub const QUOTE_DISMISSED_KEY: &str = "quote_dismissed_day";

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
}

/// SQLite database for the journal.
pub struct JournalDb {
    conn: Connection,
}

impl JournalDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data_dir>/journal.db`.
    ///
    /// Creates the file and schema if they don't exist and seeds the
    /// quote table from `<data_dir>/quotes_seed.json` when incomplete.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let dir = data_dir()?;
        let path = dir.join("journal.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        db.ensure_quotes_seeded(&dir.join("quotes_seed.json"))?;
        Ok(db)
    }

    /// Open a database at an explicit path (no quote seeding).
    pub fn open_at(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        Ok(db)
    }

    /// Open an in-memory database (mainly for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS habits (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS habit_checks (
                day      TEXT NOT NULL,
                habit_id INTEGER NOT NULL,
                checked  INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (day, habit_id),
                FOREIGN KEY (habit_id) REFERENCES habits(id)
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                day             TEXT NOT NULL,
                task_type       TEXT NOT NULL DEFAULT 'small',
                title           TEXT NOT NULL,
                estimated_hours REAL NOT NULL DEFAULT 0,
                start_time      TEXT NOT NULL DEFAULT '',
                spent_hours     REAL NOT NULL DEFAULT 0,
                is_done         INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS quotes (
                day_of_year INTEGER PRIMARY KEY,
                quote       TEXT NOT NULL,
                author      TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_day ON tasks(day);
            CREATE INDEX IF NOT EXISTS idx_habit_checks_day ON habit_checks(day);

            INSERT OR IGNORE INTO settings(key, value) VALUES ('day_start', '09:00');",
        )
    }

    // === Settings ===

    /// Read a setting, inserting `default` on first access.
    pub fn get_setting(&self, key: &str, default: &str) -> Result<String, CoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(DatabaseError::from)?;
        match row {
            Some(value) => Ok(value),
            None => {
                self.conn
                    .execute(
                        "INSERT OR IGNORE INTO settings(key, value) VALUES (?1, ?2)",
                        params![key, default],
                    )
                    .map_err(DatabaseError::from)?;
                Ok(default.to_string())
            }
        }
    }

    /// Upsert a setting.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.conn
            .execute(
                "INSERT INTO settings(key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// The configured day-start boundary as `"HH:MM"` text.
    pub fn day_start(&self) -> Result<String, CoreError> {
        self.get_setting(DAY_START_KEY, crate::clock::DEFAULT_DAY_START)
    }

    // === Habits ===

    pub fn list_habits(&self) -> Result<Vec<Habit>, CoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM habits ORDER BY id")
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Habit {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(DatabaseError::from)?;
        let mut habits = Vec::new();
        for habit in rows {
            habits.push(habit.map_err(DatabaseError::from)?);
        }
        Ok(habits)
    }

    /// Add a habit; at most [`MAX_HABITS`] unique names are allowed.
    pub fn add_habit(&self, name: &str) -> Result<i64, CoreError> {
        let clean = name.trim();
        if clean.is_empty() {
            return Err(ValidationError::EmptyHabitName.into());
        }
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))
            .map_err(DatabaseError::from)?;
        if count >= MAX_HABITS {
            return Err(ValidationError::HabitLimit(MAX_HABITS).into());
        }
        match self
            .conn
            .execute("INSERT INTO habits(name) VALUES (?1)", params![clean])
        {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(ValidationError::DuplicateHabit.into())
            }
            Err(err) => Err(DatabaseError::from(err).into()),
        }
    }

    /// Ids of habits checked on `day`.
    pub fn checked_habits(&self, day: NaiveDate) -> Result<HashSet<i64>, CoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT habit_id FROM habit_checks WHERE day = ?1 AND checked = 1")
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map(params![day.to_string()], |row| row.get::<_, i64>(0))
            .map_err(DatabaseError::from)?;
        let mut checked = HashSet::new();
        for id in rows {
            checked.insert(id.map_err(DatabaseError::from)?);
        }
        Ok(checked)
    }

    /// Set or clear a habit check for one day.
    pub fn set_habit_check(
        &self,
        day: NaiveDate,
        habit_id: i64,
        checked: bool,
    ) -> Result<(), CoreError> {
        self.conn
            .execute(
                "INSERT INTO habit_checks(day, habit_id, checked) VALUES (?1, ?2, ?3)
                 ON CONFLICT(day, habit_id) DO UPDATE SET checked = excluded.checked",
                params![day.to_string(), habit_id, checked as i64],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Total habit checks in the inclusive day range.
    pub fn count_checked_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64, CoreError> {
        let total = self
            .conn
            .query_row(
                "SELECT COALESCE(SUM(checked), 0) FROM habit_checks
                 WHERE day >= ?1 AND day <= ?2",
                params![start.to_string(), end.to_string()],
                |row| row.get(0),
            )
            .map_err(DatabaseError::from)?;
        Ok(total)
    }

    // === Tasks ===

    fn check_category_limit(
        &self,
        day: NaiveDate,
        category: TaskCategory,
        exclude_task_id: Option<i64>,
    ) -> Result<(), CoreError> {
        let Some(limit) = category.daily_limit() else {
            return Ok(());
        };
        let count: u32 = match exclude_task_id {
            None => self
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM tasks WHERE day = ?1 AND task_type = ?2",
                    params![day.to_string(), category.as_str()],
                    |row| row.get(0),
                )
                .map_err(DatabaseError::from)?,
            Some(task_id) => self
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM tasks
                     WHERE day = ?1 AND task_type = ?2 AND id != ?3",
                    params![day.to_string(), category.as_str(), task_id],
                    |row| row.get(0),
                )
                .map_err(DatabaseError::from)?,
        };
        if count >= limit {
            return Err(ValidationError::CategoryLimit {
                label: category.label(),
                limit,
            }
            .into());
        }
        Ok(())
    }

    /// Add a task for a day.
    ///
    /// Admission control: non-empty title, non-negative estimate and the
    /// per-category daily limit. The start time is stored as given; a
    /// value that later fails to parse simply leaves the task
    /// unscheduled on the timeline.
    pub fn add_task(
        &self,
        day: NaiveDate,
        category: TaskCategory,
        title: &str,
        estimated_hours: f64,
        start_time: Option<&str>,
    ) -> Result<i64, CoreError> {
        let clean_title = title.trim();
        if clean_title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if estimated_hours < 0.0 {
            return Err(ValidationError::NegativeHours.into());
        }
        self.check_category_limit(day, category, None)?;

        let clean_start = start_time.map(str::trim).unwrap_or("");
        self.conn
            .execute(
                "INSERT INTO tasks(day, task_type, title, estimated_hours, start_time, spent_hours)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0)",
                params![
                    day.to_string(),
                    category.as_str(),
                    clean_title,
                    estimated_hours,
                    clean_start,
                ],
            )
            .map_err(DatabaseError::from)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List tasks for a day in display order: category rank (unknown
    /// stored names after all known ones), then start time with empty
    /// last, then id.
    pub fn list_tasks(&self, day: NaiveDate) -> Result<Vec<Task>, CoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, task_type, title, estimated_hours, start_time, spent_hours, is_done
                 FROM tasks
                 WHERE day = ?1
                 ORDER BY
                     CASE task_type
                         WHEN 'focus' THEN 0
                         WHEN 'main' THEN 1
                         WHEN 'small' THEN 2
                         WHEN 'pleasure' THEN 3
                         WHEN 'reserved' THEN 4
                         ELSE 9
                     END,
                     COALESCE(NULLIF(start_time, ''), '99:99'),
                     id",
            )
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map(params![day.to_string()], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, f64>(5)?,
                    row.get::<_, bool>(6)?,
                ))
            })
            .map_err(DatabaseError::from)?;

        let mut tasks = Vec::new();
        for row in rows {
            let (id, task_type, title, estimated_hours, start_time, spent_hours, is_done) =
                row.map_err(DatabaseError::from)?;
            tasks.push(Task {
                id,
                day,
                // Unknown stored names degrade to Small on load.
                category: task_type.parse().unwrap_or(TaskCategory::Small),
                title,
                estimated_hours,
                start_time: (!start_time.is_empty()).then_some(start_time),
                spent_hours,
                is_done,
            });
        }
        Ok(tasks)
    }

    /// Fetch a single task by id.
    pub fn get_task(&self, task_id: i64) -> Result<Option<Task>, CoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, day, task_type, title, estimated_hours, start_time, spent_hours, is_done
                 FROM tasks WHERE id = ?1",
                params![task_id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, f64>(4)?,
                        row.get::<_, String>(5)?,
                        row.get::<_, f64>(6)?,
                        row.get::<_, bool>(7)?,
                    ))
                },
            )
            .optional()
            .map_err(DatabaseError::from)?;

        let Some((id, day, task_type, title, estimated_hours, start_time, spent_hours, is_done)) =
            row
        else {
            return Ok(None);
        };
        let day = day
            .parse::<NaiveDate>()
            .map_err(|err| DatabaseError::QueryFailed(format!("invalid day '{day}': {err}")))?;
        Ok(Some(Task {
            id,
            day,
            category: task_type.parse().unwrap_or(TaskCategory::Small),
            title,
            estimated_hours,
            start_time: (!start_time.is_empty()).then_some(start_time),
            spent_hours,
            is_done,
        }))
    }

    /// Update a task in place, re-running admission control with the
    /// task itself excluded from its category count.
    pub fn update_task(&self, task: &Task) -> Result<(), CoreError> {
        let clean_title = task.title.trim();
        if clean_title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if task.estimated_hours < 0.0 || task.spent_hours < 0.0 {
            return Err(ValidationError::NegativeHours.into());
        }
        self.check_category_limit(task.day, task.category, Some(task.id))?;

        let clean_start = task.start_time.as_deref().map(str::trim).unwrap_or("");
        self.conn
            .execute(
                "UPDATE tasks
                 SET task_type = ?1, title = ?2, estimated_hours = ?3, start_time = ?4,
                     spent_hours = ?5, is_done = ?6
                 WHERE id = ?7",
                params![
                    task.category.as_str(),
                    clean_title,
                    task.estimated_hours,
                    clean_start,
                    task.spent_hours,
                    task.is_done,
                    task.id,
                ],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    pub fn delete_task(&self, task_id: i64) -> Result<(), CoreError> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![task_id])
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    // === Quotes ===

    /// Seed the quotes table from a JSON seed file unless it already
    /// holds exactly one quote per day.
    pub fn ensure_quotes_seeded(&self, seed_path: &Path) -> Result<(), CoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))
            .map_err(DatabaseError::from)?;
        if count == quotes::QUOTE_DAYS as i64 {
            return Ok(());
        }
        self.replace_quotes(&quotes::load_quote_seed(seed_path))
    }

    /// Replace the quotes table with the given per-day entries.
    pub fn replace_quotes(&self, entries: &[DailyQuote]) -> Result<(), CoreError> {
        self.conn
            .execute("DELETE FROM quotes", [])
            .map_err(DatabaseError::from)?;
        let mut stmt = self
            .conn
            .prepare("INSERT INTO quotes(day_of_year, quote, author) VALUES (?1, ?2, ?3)")
            .map_err(DatabaseError::from)?;
        for (index, entry) in entries.iter().enumerate() {
            stmt.execute(params![index as i64 + 1, entry.quote, entry.author])
                .map_err(DatabaseError::from)?;
        }
        Ok(())
    }

    /// The quote for a calendar date; day-of-year clamps to 365.
    pub fn quote_for_date(&self, day: NaiveDate) -> Result<DailyQuote, CoreError> {
        use chrono::Datelike;

        let day_of_year = (day.ordinal() as i64).min(quotes::QUOTE_DAYS as i64);
        let row = self
            .conn
            .query_row(
                "SELECT quote, author FROM quotes WHERE day_of_year = ?1",
                params![day_of_year],
                |row| {
                    Ok(DailyQuote {
                        quote: row.get(0)?,
                        author: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(DatabaseError::from)?;
        Ok(row.unwrap_or_else(DailyQuote::fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn open_db() -> JournalDb {
        JournalDb::open_memory().unwrap()
    }

    #[test]
    fn day_start_seeded_to_default() {
        let db = open_db();
        assert_eq!(db.day_start().unwrap(), "09:00");

        db.set_setting(DAY_START_KEY, "07:30").unwrap();
        assert_eq!(db.day_start().unwrap(), "07:30");
    }

    #[test]
    fn get_setting_inserts_default_once() {
        let db = open_db();
        assert_eq!(db.get_setting("new_key", "fallback").unwrap(), "fallback");
        db.set_setting("new_key", "changed").unwrap();
        assert_eq!(db.get_setting("new_key", "fallback").unwrap(), "changed");
    }

    #[test]
    fn add_and_list_tasks_in_display_order() {
        let db = open_db();
        let d = day(30);
        db.add_task(d, TaskCategory::Small, "Later small", 1.0, Some("12:00"))
            .unwrap();
        db.add_task(d, TaskCategory::Focus, "Deep work", 2.0, None)
            .unwrap();
        db.add_task(d, TaskCategory::Small, "Early small", 1.0, Some("08:00"))
            .unwrap();
        db.add_task(d, TaskCategory::Small, "No start", 1.0, None)
            .unwrap();

        let titles: Vec<String> = db
            .list_tasks(d)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Deep work", "Early small", "Later small", "No start"]
        );
    }

    #[test]
    fn task_validation_rules() {
        let db = open_db();
        let d = day(30);

        let err = db.add_task(d, TaskCategory::Small, "   ", 1.0, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyTitle)
        ));

        let err = db.add_task(d, TaskCategory::Small, "Bad", -0.5, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::NegativeHours)
        ));
    }

    #[test]
    fn category_limits_enforced() {
        let db = open_db();
        let d = day(30);
        db.add_task(d, TaskCategory::Focus, "One", 1.0, None).unwrap();

        let err = db.add_task(d, TaskCategory::Focus, "Two", 1.0, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::CategoryLimit { limit: 1, .. })
        ));

        db.add_task(d, TaskCategory::Main, "M1", 1.0, None).unwrap();
        db.add_task(d, TaskCategory::Main, "M2", 1.0, None).unwrap();
        assert!(db.add_task(d, TaskCategory::Main, "M3", 1.0, None).is_err());

        // Unlimited categories keep accepting.
        for i in 0..5 {
            db.add_task(d, TaskCategory::Small, &format!("S{i}"), 0.5, None)
                .unwrap();
        }

        // A different day has its own limit count.
        db.add_task(day(31), TaskCategory::Focus, "Next day", 1.0, None)
            .unwrap();
    }

    #[test]
    fn update_excludes_self_from_limit() {
        let db = open_db();
        let d = day(30);
        let id = db.add_task(d, TaskCategory::Focus, "Deep", 1.0, None).unwrap();

        let mut task = db.get_task(id).unwrap().unwrap();
        task.title = "Deeper".to_string();
        task.is_done = true;
        db.update_task(&task).unwrap();

        let reloaded = db.get_task(id).unwrap().unwrap();
        assert_eq!(reloaded.title, "Deeper");
        assert!(reloaded.is_done);
        assert_eq!(reloaded.category, TaskCategory::Focus);
    }

    #[test]
    fn delete_task_removes_it() {
        let db = open_db();
        let id = db
            .add_task(day(30), TaskCategory::Small, "Gone", 1.0, None)
            .unwrap();
        db.delete_task(id).unwrap();
        assert!(db.get_task(id).unwrap().is_none());
        assert!(db.list_tasks(day(30)).unwrap().is_empty());
    }

    #[test]
    fn empty_start_time_loads_as_none() {
        let db = open_db();
        let d = day(30);
        db.add_task(d, TaskCategory::Small, "Unpinned", 1.0, Some("   "))
            .unwrap();
        db.add_task(d, TaskCategory::Small, "Pinned", 1.0, Some("10:00"))
            .unwrap();

        let tasks = db.list_tasks(d).unwrap();
        assert_eq!(tasks[0].start_time.as_deref(), Some("10:00"));
        assert_eq!(tasks[1].start_time, None);
    }

    #[test]
    fn habit_rules() {
        let db = open_db();
        assert!(matches!(
            db.add_habit("  ").unwrap_err(),
            CoreError::Validation(ValidationError::EmptyHabitName)
        ));

        db.add_habit("Read").unwrap();
        assert!(matches!(
            db.add_habit("Read").unwrap_err(),
            CoreError::Validation(ValidationError::DuplicateHabit)
        ));

        for name in ["Run", "Write", "Stretch", "Sleep early"] {
            db.add_habit(name).unwrap();
        }
        assert!(matches!(
            db.add_habit("One too many").unwrap_err(),
            CoreError::Validation(ValidationError::HabitLimit(MAX_HABITS))
        ));
        assert_eq!(db.list_habits().unwrap().len(), MAX_HABITS as usize);
    }

    #[test]
    fn habit_checks_round_trip() {
        let db = open_db();
        let read = db.add_habit("Read").unwrap();
        let run = db.add_habit("Run").unwrap();

        db.set_habit_check(day(29), read, true).unwrap();
        db.set_habit_check(day(30), read, true).unwrap();
        db.set_habit_check(day(30), run, true).unwrap();
        db.set_habit_check(day(30), run, false).unwrap();

        let checked = db.checked_habits(day(30)).unwrap();
        assert!(checked.contains(&read));
        assert!(!checked.contains(&run));
        assert_eq!(db.count_checked_between(day(29), day(30)).unwrap(), 2);
        assert_eq!(db.count_checked_between(day(1), day(28)).unwrap(), 0);
    }

    #[test]
    fn quotes_fall_back_when_unseeded() {
        let db = open_db();
        assert_eq!(db.quote_for_date(day(30)).unwrap(), DailyQuote::fallback());
    }

    #[test]
    fn seeded_quotes_resolve_by_day_of_year() {
        let db = open_db();
        let mut entries = vec![DailyQuote::fallback(); quotes::QUOTE_DAYS];
        // 2026-08-30 is day-of-year 242.
        entries[241] = DailyQuote {
            quote: "Today's words.".to_string(),
            author: "Someone".to_string(),
        };
        db.replace_quotes(&entries).unwrap();

        assert_eq!(db.quote_for_date(day(30)).unwrap().quote, "Today's words.");
        // Seeding is skipped when the table is already complete.
        db.ensure_quotes_seeded(Path::new("/nonexistent.json")).unwrap();
        assert_eq!(db.quote_for_date(day(30)).unwrap().quote, "Today's words.");
    }

    #[test]
    fn leap_day_overflow_clamps_to_last_quote() {
        let db = open_db();
        let mut entries = vec![DailyQuote::fallback(); quotes::QUOTE_DAYS];
        entries[364] = DailyQuote {
            quote: "Final.".to_string(),
            author: "Z".to_string(),
        };
        db.replace_quotes(&entries).unwrap();

        // 2024-12-31 is day-of-year 366 in a leap year.
        let leap_tail = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(db.quote_for_date(leap_tail).unwrap().quote, "Final.");
    }
}
