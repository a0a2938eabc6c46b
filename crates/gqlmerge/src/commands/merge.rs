use crate::commands;
use crate::indent::IndentPattern;
use crate::output_utils;
use crate::schema_files::DEFAULT_SCHEMA_FILE_EXTS;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(
        default_values_t=DEFAULT_SCHEMA_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=IndentPattern::default(),
        help="Indentation per nesting level as `{count}{kind}`, where kind is \
             `s` (space) or `t` (tab). The count defaults to 1.",
        long,
    )]
    indent: IndentPattern,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be merged.",
        name="FILE_OR_DIR_PATHS",
        num_args=1..,
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,

    #[arg(
        help="File to write the merged schema to.",
        name="OUTPUT",
        required=true,
    )]
    output: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let merged = match commands::load_and_merge(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        ).await {
            Ok(merged) => merged,
            Err(message) => return CommandResult::stderr(format_args!(
                "{} {message}",
                output_utils::RED_X,
            )),
        };

        let indent_unit = self.indent.unit();
        log::debug!("Serializing with indent pattern `{}`.", self.indent);
        let sdl = libgqlmerge::serialize(&merged.document, &indent_unit);

        if let Err(e) = write_output(&self.output, &sdl).await {
            return CommandResult::stderr(format_args!(
                "{} Failed to write {:#?}: {e:#}",
                output_utils::RED_X,
                self.output,
            ));
        }

        CommandResult::stdout(format_args!(
            "{} Merged {} files ({} definitions) into {}.",
            output_utils::GREEN_CHECK,
            merged.num_files,
            merged.document.definition_count(),
            self.output.display(),
        ))
    }
}

async fn write_output(path: &Path, sdl: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, sdl).await?;
    log::debug!("Wrote {} bytes to {path:#?}.", sdl.len());
    Ok(())
}
