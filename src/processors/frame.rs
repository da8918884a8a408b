//! Header and cell translation for [`DataFrame`]s

use std::borrow::Cow;
use tracing::{debug, info, warn};

use crate::core::client::TranslationClient;
use crate::core::errors::{Result, TranslationError};
use crate::core::frame::DataFrame;
use crate::core::models::TranslateOptions;

impl TranslationClient {
    /// Translate the column names of `frame` into `target`
    ///
    /// Every name is translated on its own, with `options.source` or a fresh
    /// detection per name. With `options.copy` the caller's frame is left
    /// untouched and the translated duplicate is returned as `Cow::Owned`;
    /// otherwise `frame` itself is updated.
    ///
    /// Names are written back only once all of them were translated, so a
    /// failed call leaves `frame` as it was.
    pub async fn translate_header<'a>(
        &self,
        frame: &'a mut DataFrame,
        target: &str,
        options: &TranslateOptions,
    ) -> Result<Cow<'a, DataFrame>> {
        info!(
            "Translating header: {} columns -> {}",
            frame.n_columns(),
            target
        );

        let names: Vec<String> = frame.column_names().into_iter().map(String::from).collect();
        let translated = self
            .translate_all(&names, target, options.source.as_deref())
            .await
            .map_err(|e| {
                warn!("Header translation aborted: {}", e);
                e
            })?;

        let result = if options.copy {
            let mut copy = frame.clone();
            copy.set_column_names(translated)?;
            Cow::Owned(copy)
        } else {
            frame.set_column_names(translated)?;
            Cow::Borrowed(&*frame)
        };

        info!("Header translated");
        Ok(result)
    }

    /// Translate every value of the named `columns` into `target`
    ///
    /// Each cell is translated on its own; without `options.source` every
    /// cell gets its own detection call. Columns not listed and the row order
    /// are kept. All columns must exist, which is checked before any request
    /// is sent.
    pub async fn translate_entries<'a, S: AsRef<str>>(
        &self,
        frame: &'a mut DataFrame,
        columns: &[S],
        target: &str,
        options: &TranslateOptions,
    ) -> Result<Cow<'a, DataFrame>> {
        for name in columns {
            if frame.column(name.as_ref()).is_none() {
                return Err(TranslationError::ColumnNotFound {
                    column: name.as_ref().to_string(),
                });
            }
        }

        info!(
            "Translating entries: {} columns x {} rows -> {}",
            columns.len(),
            frame.n_rows(),
            target
        );

        // a column listed twice is translated again from its staged values
        let mut staged: Vec<(&str, Vec<String>)> = Vec::with_capacity(columns.len());
        for name in columns {
            let name = name.as_ref();
            let values = match staged.iter().rev().find(|(staged_name, _)| *staged_name == name) {
                Some((_, values)) => values.clone(),
                None => match frame.column(name) {
                    Some(column) => column.values.clone(),
                    None => continue,
                },
            };

            debug!("Translating column '{}'", name);
            let translated = self
                .translate_all(&values, target, options.source.as_deref())
                .await
                .map_err(|e| {
                    warn!("Entry translation aborted in column '{}': {}", name, e);
                    e
                })?;
            staged.push((name, translated));
        }

        let result = if options.copy {
            let mut copy = frame.clone();
            apply_columns(&mut copy, staged)?;
            Cow::Owned(copy)
        } else {
            apply_columns(frame, staged)?;
            Cow::Borrowed(&*frame)
        };

        info!("Entries translated");
        Ok(result)
    }

    /// Translate `texts` one after another, keeping their order
    async fn translate_all(
        &self,
        texts: &[String],
        target: &str,
        source: Option<&str>,
    ) -> Result<Vec<String>> {
        let mut translated = Vec::with_capacity(texts.len());
        for text in texts {
            translated.push(self.translate(text, target, source).await?);
        }
        Ok(translated)
    }
}

fn apply_columns(frame: &mut DataFrame, staged: Vec<(&str, Vec<String>)>) -> Result<()> {
    for (name, values) in staged {
        frame.replace_values(name, values)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use crate::core::frame::Column;
    use crate::test_support::{spawn, FakeService};

    fn people() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Name", ["Ana", "Luis"]),
            Column::new("Age", ["31", "45"]),
        ])
        .unwrap()
    }

    fn cities() -> DataFrame {
        DataFrame::new(vec![
            Column::new("City", ["Paris", "Rome"]),
            Column::new("Country", ["Francia", "Italia"]),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_translate_header_in_place() {
        let fake = spawn(FakeService::with_translations(&[
            ("Name", "Nombre"),
            ("Age", "Edad"),
        ]))
        .await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = people();
        let result = client
            .translate_header(&mut frame, "es", &TranslateOptions::new())
            .await
            .unwrap();

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.column_names(), vec!["Nombre", "Edad"]);
        assert_eq!(result.rows(), vec![vec!["Ana", "31"], vec!["Luis", "45"]]);
        drop(result);
        assert_eq!(frame.column_names(), vec!["Nombre", "Edad"]);

        // one detection per name
        assert_eq!(fake.count("detect"), 2);
        assert_eq!(fake.count("translate"), 2);
    }

    #[tokio::test]
    async fn test_translate_header_copy_leaves_original() {
        let fake = spawn(FakeService::with_translations(&[
            ("Name", "Nombre"),
            ("Age", "Edad"),
        ]))
        .await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = people();
        let result = client
            .translate_header(&mut frame, "es", &TranslateOptions::new().copied())
            .await
            .unwrap()
            .into_owned();

        assert_eq!(result.column_names(), vec!["Nombre", "Edad"]);
        assert_eq!(frame, people());
    }

    #[tokio::test]
    async fn test_translate_header_fixed_source() {
        let fake = spawn(FakeService::default()).await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = people();
        client
            .translate_header(&mut frame, "de", &TranslateOptions::new().with_source("en"))
            .await
            .unwrap();

        assert_eq!(fake.count("detect"), 0);
        for call in fake.calls() {
            assert_eq!(call.body["source"], "en");
            assert_eq!(call.body["target"], "de");
        }
    }

    #[tokio::test]
    async fn test_translate_entries_identity() {
        let fake = spawn(FakeService::with_translations(&[
            ("Paris", "Paris"),
            ("Rome", "Rome"),
        ]))
        .await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = cities();
        let result = client
            .translate_entries(&mut frame, &["City"], "en", &TranslateOptions::new())
            .await
            .unwrap();

        assert_eq!(*result, cities());
        // detection runs per cell, not per column
        assert_eq!(fake.count("detect"), 2);
        assert_eq!(fake.count("translate"), 2);
    }

    #[tokio::test]
    async fn test_translate_entries_only_selected_columns() {
        let fake = spawn(FakeService::with_translations(&[
            ("Francia", "France"),
            ("Italia", "Italy"),
        ]))
        .await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = cities();
        client
            .translate_entries(
                &mut frame,
                &["Country".to_string()],
                "en",
                &TranslateOptions::new().with_source("es"),
            )
            .await
            .unwrap();

        assert_eq!(frame.column_names(), vec!["City", "Country"]);
        assert_eq!(frame.column("City").unwrap().values, vec!["Paris", "Rome"]);
        assert_eq!(frame.column("Country").unwrap().values, vec!["France", "Italy"]);

        let texts: Vec<_> = fake.calls().iter().map(|c| c.body["q"].clone()).collect();
        assert_eq!(texts, vec!["Francia", "Italia"]);
    }

    #[tokio::test]
    async fn test_translate_entries_copy_leaves_original() {
        let fake = spawn(FakeService::with_translations(&[("Rome", "Roma")])).await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = cities();
        let result = client
            .translate_entries(&mut frame, &["City"], "it", &TranslateOptions::new().copied())
            .await
            .unwrap();

        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result.column("City").unwrap().values, vec!["Paris", "Roma"]);
        drop(result);
        assert_eq!(frame, cities());
    }

    #[tokio::test]
    async fn test_unknown_column_sends_nothing() {
        let fake = spawn(FakeService::default()).await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = cities();
        let err = client
            .translate_entries(&mut frame, &["City", "Mayor"], "en", &TranslateOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TranslationError::ColumnNotFound { ref column } if column == "Mayor"));
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_aborts_batch_without_partial_write() {
        let fake = spawn(FakeService {
            fail_on: Some("Italia".to_string()),
            ..FakeService::with_translations(&[("Paris", "Parigi"), ("Rome", "Roma")])
        })
        .await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = cities();
        let err = client
            .translate_entries(
                &mut frame,
                &["City", "Country"],
                "it",
                &TranslateOptions::new().with_source("en"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert_eq!(frame, cities());
        // Paris, Rome, Francia, then the failing Italia
        assert_eq!(fake.count("translate"), 4);
    }

    #[tokio::test]
    async fn test_repeated_column_is_translated_twice() {
        let fake = spawn(FakeService::with_translations(&[("a", "b"), ("b", "c")])).await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = DataFrame::new(vec![Column::new("X", ["a"])]).unwrap();
        client
            .translate_entries(
                &mut frame,
                &["X", "X"],
                "en",
                &TranslateOptions::new().with_source("en"),
            )
            .await
            .unwrap();

        assert_eq!(frame.column("X").unwrap().values, vec!["c"]);
        let texts: Vec<_> = fake.calls().iter().map(|c| c.body["q"].clone()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_header_failure_keeps_names() {
        let fake = spawn(FakeService {
            fail_on: Some("Age".to_string()),
            ..Default::default()
        })
        .await;
        let client = TranslationClient::with_server(&fake.url).unwrap();

        let mut frame = people();
        assert!(client
            .translate_header(&mut frame, "es", &TranslateOptions::new().with_source("en"))
            .await
            .is_err());
        assert_eq!(frame.column_names(), vec!["Name", "Age"]);
    }
}
