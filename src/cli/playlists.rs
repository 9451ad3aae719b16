use tabled::Table;

use crate::{
    error,
    error::CatalogError,
    info,
    spotify::Catalog,
    types::{Playlist, PlaylistTableRow, UserProfile},
    utils,
};

pub async fn list_playlists() {
    let client = super::connect().await;

    let pb = utils::spinner("Getting your playlists...");
    let result = fetch_listable_playlists(&client).await;
    pb.finish_and_clear();

    match result {
        Ok((user, playlists)) => {
            if playlists.is_empty() {
                info!("No playlists with tracks found for {}", user.id);
                return;
            }

            let rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| {
                    let owner = utils::format_owner(&p.owner, &user.id);
                    PlaylistTableRow {
                        name: p.name,
                        tracks: p.tracks.total,
                        owner: if owner.is_empty() {
                            "You".to_string()
                        } else {
                            owner
                        },
                        id: p.id,
                    }
                })
                .collect();

            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Sorry, I couldn't find your playlists. Err: {}", e),
    }
}

/// Fetches every playlist of the current user that has at least one track,
/// following `next` links until exhausted.
pub async fn fetch_listable_playlists(
    catalog: &dyn Catalog,
) -> Result<(UserProfile, Vec<Playlist>), CatalogError> {
    let user = catalog.current_user().await?;

    let mut next = Some(format!(
        "{api_url}/users/{user_id}/playlists?limit=50",
        api_url = catalog.api_url(),
        user_id = user.id
    ));
    let mut playlists = Vec::new();

    while let Some(url) = next.take() {
        let page = catalog.user_playlists_page(&url).await?;
        playlists.extend(page.items.into_iter().filter(utils::is_listable));
        next = page.next;
    }

    Ok((user, playlists))
}
