use tabled::Table;

use crate::{
    error, info,
    management::Session,
    pipeline::{
        self,
        filter::TempoFilter,
        view::{self, ViewSpec},
    },
    spotify::Catalog,
    success,
    types::TrackTableRow,
    utils,
};

pub async fn show(playlist: &str, spec: ViewSpec<TempoFilter>) {
    let client = super::connect().await;
    let mut session = Session::new();
    load(&client, &mut session, playlist).await;

    let rows = view::ordered_view(session.entries(), &spec);
    let table_rows: Vec<TrackTableRow> = rows.iter().map(|e| view::table_row(e)).collect();
    println!("{}", Table::new(table_rows));

    info!(
        "{} of {} tracks shown, ordered by {}",
        rows.len(),
        session.entries().len(),
        spec.sort_name()
    );
}

/// Loads a playlist into `session`, exiting with an error message on failure.
pub(crate) async fn load(catalog: &dyn Catalog, session: &mut Session, playlist: &str) {
    let playlist_id = utils::parse_playlist_id(playlist);
    let playlist = match catalog.playlist(&playlist_id).await {
        Ok(p) => p,
        Err(e) => error!("Cannot find playlist {}. Err: {}", playlist_id, e),
    };

    let name = playlist.name.clone();
    let pb = utils::spinner(format!("Loading {}...", name));
    let mut loaded = 0;

    let result = pipeline::load_playlist(catalog, session, playlist, |page| {
        loaded += page.len();
        pb.set_message(format!("Loading {}... {} tracks", name, loaded));
    })
    .await;
    pb.finish_and_clear();

    match result {
        Ok(count) => success!("Loaded {} tracks from {}", count, name),
        Err(e) => error!("Error while loading playlist: {}", e),
    }
}
