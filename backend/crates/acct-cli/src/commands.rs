use crate::error::Result as CliErrorResult;

use acct_core::{Account, NewAccount};
use acct_db::UserRepository;

use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up an account by identity-provider subject
    Find {
        /// Subject in the form <provider>|<local-id>
        subject: String,
    },

    /// Create an account
    Create {
        /// Subject in the form <provider>|<local-id>
        #[arg(long)]
        subject: String,

        #[arg(long)]
        email: String,

        /// Mark the email address as verified
        #[arg(long)]
        email_verified: bool,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Picture URL
        #[arg(long)]
        picture: Option<String>,

        #[arg(long)]
        locale: Option<String>,
    },
}

impl Commands {
    pub async fn execute(self, repo: &UserRepository) -> CliErrorResult<Account> {
        let account = match self {
            Commands::Find { subject } => repo.find_by_subject(&subject).await?,
            Commands::Create {
                subject,
                email,
                email_verified,
                first_name,
                last_name,
                picture,
                locale,
            } => {
                let request = NewAccount {
                    subject,
                    email,
                    email_verified,
                    first_name,
                    last_name,
                    picture,
                    locale,
                };
                repo.create(request, Utc::now()).await?
            }
        };

        Ok(account)
    }
}
