use crate::core::ContactFields;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-book")]
#[command(about = "Browse, search and edit contacts served by a REST API")]
pub struct CliConfig {
    /// Base URL of the contacts API (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Match search terms as plain text instead of regular expressions
    #[arg(long, global = true)]
    pub literal_search: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every contact and the tag list
    List,
    /// Show the tag list with frequencies
    Tags,
    /// Show contacts whose name matches a term
    Search { term: String },
    /// Show contacts carrying a tag; accepts a bare name or a label like "work (2)"
    Tag { label: String },
    /// Show one contact's editable fields
    Show { id: u64 },
    /// Create a contact
    Add {
        #[command(flatten)]
        fields: ContactArgs,
    },
    /// Change some fields of a contact
    Edit {
        id: u64,
        #[command(flatten)]
        fields: ContactArgs,
    },
    /// Delete a contact
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ContactArgs {
    #[arg(long = "name")]
    pub full_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long = "phone")]
    pub phone_number: Option<String>,
    /// Comma-separated tag names
    #[arg(long)]
    pub tags: Option<String>,
}

impl ContactArgs {
    /// Overwrites the given fields with every value supplied on the command line.
    pub fn apply_to(&self, mut fields: ContactFields) -> ContactFields {
        if let Some(full_name) = &self.full_name {
            fields.full_name = full_name.clone();
        }
        if let Some(email) = &self.email {
            fields.email = email.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            fields.phone_number = phone_number.clone();
        }
        if let Some(tags) = &self.tags {
            fields.tags = tags.clone();
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = CliConfig::parse_from([
            "contact-book",
            "add",
            "--name",
            "Ada",
            "--tags",
            "work,math",
        ]);
        let Command::Add { fields } = cli.command else {
            panic!("expected add");
        };
        let fields = fields.apply_to(ContactFields::default());
        assert_eq!(fields.full_name, "Ada");
        assert_eq!(fields.tags, "work,math");
        assert_eq!(fields.email, "");
    }

    #[test]
    fn test_edit_keeps_unspecified_fields() {
        let args = ContactArgs {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        let current = ContactFields {
            full_name: "Ada".to_string(),
            email: "old@example.com".to_string(),
            phone_number: "1".to_string(),
            tags: "work".to_string(),
        };
        let merged = args.apply_to(current);
        assert_eq!(merged.full_name, "Ada");
        assert_eq!(merged.email, "new@example.com");
        assert_eq!(merged.tags, "work");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from(["contact-book", "delete", "4", "--yes", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Delete { id: 4, yes: true }));
    }
}
