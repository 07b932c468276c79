//! The closed command vocabulary
//!
//! Every operation the service accepts is one variant of [`Command`]. The
//! request path alone selects the command; dispatch is an exhaustive match,
//! so adding a command is a compile-time-checked change.

/// One of the sixteen operations the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListTables,
    ListSchemas,
    ListFunctions,
    ListColumns,
    ColumnType,
    ListIndexes,
    CreateTable,
    CreateIndex,
    ReadRows,
    InsertRow,
    UpsertRow,
    DeleteColumns,
    ExecSql,
    SetOwner,
    ListUsers,
    CreateUser,
}

impl Command {
    /// Every command, in route-table order.
    pub const ALL: [Command; 16] = [
        Command::ListTables,
        Command::ListSchemas,
        Command::ListFunctions,
        Command::ListColumns,
        Command::ColumnType,
        Command::ListIndexes,
        Command::CreateTable,
        Command::CreateIndex,
        Command::ReadRows,
        Command::InsertRow,
        Command::UpsertRow,
        Command::DeleteColumns,
        Command::ExecSql,
        Command::SetOwner,
        Command::ListUsers,
        Command::CreateUser,
    ];

    /// Resolve a request path to its command, if any.
    pub fn from_path(path: &str) -> Option<Command> {
        let command = match path {
            "/dt" => Command::ListTables,
            "/dn" => Command::ListSchemas,
            "/df" => Command::ListFunctions,
            "/d" => Command::ListColumns,
            "/dc" => Command::ColumnType,
            "/idx" => Command::ListIndexes,
            "/create" => Command::CreateTable,
            "/createIndex" => Command::CreateIndex,
            "/read" => Command::ReadRows,
            "/insert" => Command::InsertRow,
            "/upsert" => Command::UpsertRow,
            "/delete" => Command::DeleteColumns,
            "/execSql" => Command::ExecSql,
            "/own" => Command::SetOwner,
            "/du" => Command::ListUsers,
            "/add" => Command::CreateUser,
            _ => return None,
        };
        Some(command)
    }

    /// The request path this command is served under.
    pub fn path(self) -> &'static str {
        match self {
            Command::ListTables => "/dt",
            Command::ListSchemas => "/dn",
            Command::ListFunctions => "/df",
            Command::ListColumns => "/d",
            Command::ColumnType => "/dc",
            Command::ListIndexes => "/idx",
            Command::CreateTable => "/create",
            Command::CreateIndex => "/createIndex",
            Command::ReadRows => "/read",
            Command::InsertRow => "/insert",
            Command::UpsertRow => "/upsert",
            Command::DeleteColumns => "/delete",
            Command::ExecSql => "/execSql",
            Command::SetOwner => "/own",
            Command::ListUsers => "/du",
            Command::CreateUser => "/add",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_round_trips_through_its_path() {
        for command in Command::ALL {
            assert_eq!(Command::from_path(command.path()), Some(command));
        }
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Command::from_path("/"), None);
        assert_eq!(Command::from_path("/unknown"), None);
        assert_eq!(Command::from_path("/dt/extra"), None);
        assert_eq!(Command::from_path("/priv"), None);
        assert_eq!(Command::from_path("/exec"), None);
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = Command::ALL.iter().map(|c| c.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Command::ALL.len());
    }
}
