/// Runs a repository call on the UI thread. The SQLite store answers
/// fast enough for an admin tool; this seam is where a slow backend
/// would move onto a worker.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
