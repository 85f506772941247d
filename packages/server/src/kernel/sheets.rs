// Google Sheets implementation of BaseSpreadsheet
//
// Treats the first worksheet of a spreadsheet (looked up by title) as a
// table keyed by its header row.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use sheets_client::{header_position, Credentials, SheetsClient, Worksheet};

use super::{BaseSpreadsheet, SheetLink};

pub struct GoogleSheetsAdapter {
    client: Option<SheetsClient>,
}

impl GoogleSheetsAdapter {
    pub fn new(client: SheetsClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// An adapter whose every call fails with a configuration error.
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Prefer a pre-issued access token, else the service-account key file.
    /// Unreadable credentials leave the adapter unconfigured.
    pub async fn from_credentials(access_token: Option<&str>, key_file: &Path) -> Self {
        if let Some(token) = access_token {
            return Self::new(SheetsClient::new(Credentials::AccessToken(token.to_string())));
        }

        match Credentials::from_key_file(key_file).await {
            Ok(credentials) => Self::new(SheetsClient::new(credentials)),
            Err(e) => {
                tracing::warn!(
                    path = %key_file.display(),
                    error = %e,
                    "Google credentials unavailable, spreadsheet steps will be skipped"
                );
                Self::unconfigured()
            }
        }
    }

    async fn open(&self, sheet_name: &str) -> Result<Worksheet> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| anyhow!("Missing Google Sheets credentials"))?;

        client
            .open(sheet_name)
            .await
            .with_context(|| format!("Failed to open spreadsheet '{}'", sheet_name))
    }
}

#[async_trait]
impl BaseSpreadsheet for GoogleSheetsAdapter {
    async fn latest_link(&self, sheet_name: &str, column: &str) -> Result<Option<SheetLink>> {
        let sheet = self.open(sheet_name).await?;

        let Some(col) = sheet.find_header(column).await? else {
            tracing::warn!(sheet = sheet_name, column, "Link column not found in header row");
            return Ok(None);
        };

        let mut values = sheet.col_values(col).await?;
        if values.len() < 2 {
            return Ok(None);
        }

        let row_index = values.len() as u32;
        Ok(values.pop().map(|url| SheetLink { url, row_index }))
    }

    async fn append_link(&self, sheet_name: &str, column: &str, url: &str) -> Result<u32> {
        let sheet = self.open(sheet_name).await?;

        let col = sheet
            .find_header(column)
            .await?
            .ok_or_else(|| anyhow!("Column '{}' not found in '{}'", column, sheet_name))?;

        let row = sheet.append_to_column(col, url).await?;
        Ok(row)
    }

    async fn update_row(
        &self,
        sheet_name: &str,
        row: u32,
        fields: &[(String, String)],
    ) -> Result<()> {
        let sheet = self.open(sheet_name).await?;
        let headers = sheet.row_values(1).await?;

        let mut cells = Vec::with_capacity(fields.len());
        let mut missing = Vec::new();
        for (name, value) in fields {
            match header_position(&headers, name) {
                Some(col) => cells.push((col, value)),
                None => missing.push(name.as_str()),
            }
        }

        if !missing.is_empty() {
            bail!("Missing columns in '{}': {}", sheet_name, missing.join(", "));
        }

        for (col, value) in cells {
            sheet.update_cell(row, col, value).await?;
        }
        Ok(())
    }
}
