//! Pooled query execution and spreadsheet export.

use std::path::PathBuf;

use indexmap::IndexMap;
use pacskit_io_xlsx::{
    SpecAutofitCellsPolicy, SpecXlsxSheetWriteOptions, XlsxWriter, derive_plain_header_format,
    write_dataframe_to_xlsx,
};
use polars::prelude::DataFrame;
use postgres::{Config, NoTls};
use r2d2::{ManageConnection, Pool, PooledConnection};
use r2d2_postgres::PostgresConnectionManager;

use crate::conf::N_LEN_QUERY_PREVIEW;
use crate::connection::QueryConnection;
use crate::spec::{
    EnumRowMode, ExportError, SpecConnectionParams, SpecPoolOptions, SpecSheetOptions, SqlParam,
};

/// Exporter backed by a Postgres connection pool.
pub type PostgresExporter = SqlExporter<PostgresConnectionManager<NoTls>>;

/// Owns a connection pool and turns query results into workbooks.
///
/// Every call checks a connection out for its own duration; the pooled handle
/// returns it on drop, including on error paths.
pub struct SqlExporter<M: ManageConnection> {
    pool: Pool<M>,
    row_mode: EnumRowMode,
}

impl PostgresExporter {
    /// Open a pool against `params`, eagerly connecting `min_conn` clients.
    pub fn connect(
        params: &SpecConnectionParams,
        pool_options: &SpecPoolOptions,
    ) -> Result<Self, ExportError> {
        let mut config = Config::new();
        config
            .host(&params.host)
            .dbname(&params.database)
            .user(&params.user)
            .password(&params.password)
            .port(params.port);

        tracing::info!(
            host = %params.host,
            database = %params.database,
            port = params.port,
            "connecting to postgres"
        );
        Self::from_manager(PostgresConnectionManager::new(config, NoTls), pool_options)
    }
}

impl<M> SqlExporter<M>
where
    M: ManageConnection,
    M::Connection: QueryConnection,
{
    pub fn from_manager(manager: M, pool_options: &SpecPoolOptions) -> Result<Self, ExportError> {
        pool_options.validate()?;
        let pool = Pool::builder()
            .min_idle(Some(pool_options.min_conn))
            .max_size(pool_options.max_conn)
            .connection_timeout(pool_options.connection_timeout)
            .build(manager)
            .map_err(ExportError::PoolInit)
            .inspect_err(|err| tracing::error!("{err}"))?;

        tracing::info!(
            min_conn = pool_options.min_conn,
            max_conn = pool_options.max_conn,
            "connection pool created"
        );
        Ok(Self::from_pool(pool))
    }

    /// Wrap an already built pool.
    pub fn from_pool(pool: Pool<M>) -> Self {
        Self {
            pool,
            row_mode: EnumRowMode::default(),
        }
    }

    pub fn with_row_mode(mut self, row_mode: EnumRowMode) -> Self {
        self.row_mode = row_mode;
        self
    }

    pub fn row_mode(&self) -> EnumRowMode {
        self.row_mode
    }

    /// Current pool occupancy.
    pub fn pool_state(&self) -> r2d2::State {
        self.pool.state()
    }

    /// Run `query` with positional `params` and collect every row.
    pub fn execute_query(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<DataFrame, ExportError> {
        let c_preview = derive_query_preview(query);
        tracing::info!(query = %c_preview, n_params = params.len(), "executing query");

        let df = self
            .run_and_collect(query, params)
            .inspect_err(|err| tracing::error!(query = %c_preview, "query failed: {err}"))?;

        tracing::info!(rows = df.height(), cols = df.width(), "query returned");
        Ok(df)
    }

    fn run_and_collect(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<DataFrame, ExportError> {
        let result = {
            let mut conn = self.get_connection()?;
            conn.run_query(query, params)?
        };
        crate::table::derive_dataframe_from_result(result, self.row_mode)
    }

    fn get_connection(&self) -> Result<PooledConnection<M>, ExportError> {
        self.pool.get().map_err(ExportError::Checkout)
    }

    /// Write `df` as a single styled sheet.
    pub fn table_to_spreadsheet(
        &self,
        df: &DataFrame,
        path_file_out: impl Into<PathBuf>,
        options: &SpecSheetOptions,
    ) -> Result<PathBuf, ExportError> {
        let path_file_out = path_file_out.into();
        let path_written = write_dataframe_to_xlsx(
            df,
            &path_file_out,
            &options.sheet_name,
            &options.to_write_options(),
        )
        .inspect_err(|err| {
            tracing::error!(path = %path_file_out.display(), "export failed: {err}")
        })?;

        tracing::info!(
            path = %path_written.display(),
            rows = df.height(),
            sheet = %options.sheet_name,
            "spreadsheet written"
        );
        Ok(path_written)
    }

    pub fn query_to_spreadsheet(
        &self,
        query: &str,
        path_file_out: impl Into<PathBuf>,
        params: &[SqlParam],
        options: &SpecSheetOptions,
    ) -> Result<PathBuf, ExportError> {
        let df = self.execute_query(query, params)?;
        self.table_to_spreadsheet(&df, path_file_out, options)
    }

    /// Run each query into its own sheet, in map order.
    ///
    /// `params` is looked up by sheet name; sheets without an entry run
    /// unparameterized. The workbook is saved only after every sheet is
    /// written, so a failing query leaves no file behind.
    pub fn multiple_queries_to_spreadsheet(
        &self,
        queries: &IndexMap<String, String>,
        path_file_out: impl Into<PathBuf>,
        params: Option<&IndexMap<String, Vec<SqlParam>>>,
    ) -> Result<PathBuf, ExportError> {
        let options = SpecXlsxSheetWriteOptions {
            if_include_row_index: false,
            if_freeze_header: false,
            policy_autofit: SpecAutofitCellsPolicy::disabled(),
            fmt_header: derive_plain_header_format(),
        };
        let mut writer = XlsxWriter::new(path_file_out);

        for (c_sheet_name, c_query) in queries {
            let l_params = params
                .and_then(|dict_params| dict_params.get(c_sheet_name))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let df = self.execute_query(c_query, l_params)?;
            writer
                .write_sheet(&df, c_sheet_name, &options)
                .inspect_err(|err| {
                    tracing::error!(sheet = %c_sheet_name, "sheet write failed: {err}")
                })?;
            tracing::info!(sheet = %c_sheet_name, rows = df.height(), "sheet written");
        }

        let path_written = writer.close().inspect_err(|err| {
            tracing::error!(path = %writer.file_out().display(), "export failed: {err}")
        })?;
        tracing::info!(
            path = %path_written.display(),
            sheets = queries.len(),
            "workbook written"
        );
        Ok(path_written)
    }

    /// Drop the pool, closing every idle connection.
    pub fn close(self) {
        let state = self.pool.state();
        drop(self.pool);
        tracing::info!(connections = state.connections, "connection pool closed");
    }
}

/// One-shot export: open a pool, write `query` to `path_file_out`, close.
pub fn quick_export(
    query: &str,
    path_file_out: impl Into<PathBuf>,
    params: &SpecConnectionParams,
) -> Result<PathBuf, ExportError> {
    let exporter = PostgresExporter::connect(params, &SpecPoolOptions::default())?;
    let result =
        exporter.query_to_spreadsheet(query, path_file_out, &[], &SpecSheetOptions::default());
    exporter.close();
    result
}

fn derive_query_preview(query: &str) -> String {
    let mut c_preview: String = query.chars().take(N_LEN_QUERY_PREVIEW).collect();
    if query.chars().nth(N_LEN_QUERY_PREVIEW).is_some() {
        c_preview.push_str("...");
    }
    c_preview
}
