use crate::{
    error,
    error::PipelineError,
    info,
    management::Session,
    pipeline::{
        filter::TempoFilter,
        save::{self, SaveTarget},
        view::{self, ViewSpec},
    },
    spotify::Catalog,
    success, utils,
};

pub async fn save(playlist: &str, spec: ViewSpec<TempoFilter>, overwrite: bool) {
    let client = super::connect().await;
    let mut session = Session::new();
    super::show::load(&client, &mut session, playlist).await;

    let rows = view::ordered_view(session.entries(), &spec);
    let uris = view::track_uris(&rows);
    if uris.is_empty() {
        error!("{}", PipelineError::NothingToSave);
    }

    let current = match session.current() {
        Some(p) => p.clone(),
        None => error!("{}", PipelineError::NoPlaylistLoaded),
    };

    let target = if overwrite {
        info!("Overwriting playlist {}...", current.name);
        SaveTarget::Existing(current)
    } else {
        let user = match client.current_user().await {
            Ok(user) => user,
            Err(e) => error!("Trouble getting the user profile. Err: {}", e),
        };
        let name = utils::reordered_playlist_name(&current.name, &spec.sort_name());
        info!("Saving new playlist {}...", name);
        SaveTarget::New {
            owner_id: user.id,
            name,
            public: current.public.unwrap_or(false),
        }
    };

    let pb = utils::spinner("Saving tracks...");
    let result = save::save_playlist(&client, target, &uris).await;
    pb.finish_and_clear();

    match result {
        Ok(saved) => success!("Saved {} tracks to {}", uris.len(), saved.name),
        Err(e) => error!("{}", e),
    }
}
