use super::{name_description_body, GalleryOperations};
use crate::actions::GalleryAction;
use crate::middleware::Dispatcher;
use media_gallery_client::{endpoints, Gallery, GalleryId};

impl GalleryOperations {
    /// Load every gallery of the user
    pub async fn get_image_galleries(&self, dispatcher: &Dispatcher, auth_token: &str) {
        dispatcher.dispatch(GalleryAction::ListRequest);

        match self
            .get_json::<Vec<Gallery>>(&endpoints::galleries_url(auth_token))
            .await
        {
            Ok(galleries) => {
                log::debug!("Fetched {} galleries", galleries.len());
                dispatcher.dispatch(GalleryAction::ListResponseOk(galleries));
            }
            Err(error) => dispatcher.dispatch(GalleryAction::ListResponseError(error)),
        }
    }

    pub async fn create_image_gallery(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        name: &str,
        description: Option<&str>,
    ) {
        dispatcher.dispatch(GalleryAction::CreateRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
        });

        let body = name_description_body(name, description);
        match self
            .post_json::<Gallery>(&endpoints::galleries_url(auth_token), &body)
            .await
        {
            Ok(gallery) => dispatcher.dispatch(GalleryAction::CreateResponseOk(gallery)),
            Err(error) => dispatcher.dispatch(GalleryAction::CreateResponseError(error)),
        }
    }

    pub async fn update_image_gallery(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        gallery_id: GalleryId,
        name: &str,
        description: Option<&str>,
    ) {
        dispatcher.dispatch(GalleryAction::UpdateRequest(gallery_id));

        let body = name_description_body(name, description);
        match self
            .put_json::<Gallery>(&endpoints::gallery_url(auth_token, gallery_id), &body)
            .await
        {
            Ok(gallery) => dispatcher.dispatch(GalleryAction::UpdateResponseOk(gallery)),
            Err(error) => {
                dispatcher.dispatch(GalleryAction::UpdateResponseError { gallery_id, error })
            }
        }
    }

    pub async fn delete_image_gallery(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        gallery_id: GalleryId,
    ) {
        dispatcher.dispatch(GalleryAction::DeleteRequest(gallery_id));

        match self
            .delete(&endpoints::gallery_url(auth_token, gallery_id))
            .await
        {
            Ok(()) => dispatcher.dispatch(GalleryAction::DeleteResponseOk(gallery_id)),
            Err(error) => {
                dispatcher.dispatch(GalleryAction::DeleteResponseError { gallery_id, error })
            }
        }
    }
}
