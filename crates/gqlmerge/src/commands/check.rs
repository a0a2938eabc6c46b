use crate::commands;
use crate::output_utils;
use crate::schema_files::DEFAULT_SCHEMA_FILE_EXTS;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=DEFAULT_SCHEMA_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match commands::load_and_merge(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        ).await {
            Ok(merged) => {
                let doc = &merged.document;
                CommandResult::stdout(format_args!(
                    concat!(
                        "{} All GraphQL merged successfully:\n",
                        "  * Analyzed {} files.\n",
                        "  * Merged {} type definitions.\n",
                        "  * Merged {} directive definitions.\n",
                        "  * Merged {} other definitions.",
                    ),
                    output_utils::GREEN_CHECK,
                    merged.num_files,
                    doc.type_defs.len(),
                    doc.directive_definitions.len(),
                    doc.scalars.len()
                        + doc.enums.len()
                        + doc.interfaces.len()
                        + doc.unions.len()
                        + doc.inputs.len(),
                ))
            },

            Err(message) => CommandResult::stderr(format_args!(
                "{} {message}",
                output_utils::RED_X,
            )),
        }
    }
}
