use anyhow::Result;

fn main() -> Result<()> {
    project_search_index::cli::run()
}
