use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for release-config
#[derive(Parser, Debug, Clone)]
#[command(name = "release-config")]
#[command(about = "Resolve the release configuration of a monorepo workspace")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Project graph JSON file
    #[arg(long, value_name = "PATH", env = "RELEASE_CONFIG_PROJECT_GRAPH")]
    pub project_graph: PathBuf,

    /// Project file map JSON file
    #[arg(long, value_name = "PATH", env = "RELEASE_CONFIG_FILE_MAP")]
    pub file_map: PathBuf,

    /// Release configuration file (YAML or JSON); a top-level `release` key is unwrapped
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory project manifests are read from [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub workspace_root: Option<PathBuf>,

    /// Print the outcome as single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_inputs() {
        let args = Args::try_parse_from([
            "release-config",
            "--project-graph",
            "graph.json",
            "--file-map",
            "files.json",
        ])
        .unwrap();
        assert_eq!(args.project_graph, PathBuf::from("graph.json"));
        assert!(args.config.is_none());
        assert!(!args.compact);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "release-config",
            "--project-graph",
            "graph.json",
            "--file-map",
            "files.json",
            "--config",
            "nx.json",
            "--workspace-root",
            "/repo",
            "--compact",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("nx.json")));
        assert_eq!(args.workspace_root, Some(PathBuf::from("/repo")));
        assert!(args.compact && args.verbose);
    }
}
