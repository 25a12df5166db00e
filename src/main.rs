mod entry;

use loadreport::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
