use super::GalleryOperations;
use crate::actions::{Action, ImageScratchAction};
use crate::middleware::Dispatcher;
use media_gallery_client::{endpoints, ImageScratch};
use serde_json::json;

impl GalleryOperations {
    /// Upload a scratch image; `image` is the encoded image data
    pub async fn create_image_scratch(&self, dispatcher: &Dispatcher, auth_token: &str, image: &str) {
        dispatcher.dispatch(ImageScratchAction::CreateRequest);

        let body = json!({ "image_scratch": { "image": image } });
        match self
            .post_json::<ImageScratch>(&endpoints::image_scratches_url(auth_token), &body)
            .await
        {
            Ok(scratch) => dispatcher.dispatch(ImageScratchAction::CreateResponseOk(scratch)),
            Err(error) => dispatcher.dispatch(ImageScratchAction::CreateResponseError(error)),
        }
    }

    pub async fn delete_image_scratch(&self, dispatcher: &Dispatcher, auth_token: &str) {
        dispatcher.dispatch(ImageScratchAction::DeleteRequest);

        match self
            .delete(&endpoints::image_scratches_url(auth_token))
            .await
        {
            Ok(()) => dispatcher.dispatch(ImageScratchAction::DeleteResponseOk),
            Err(error) => dispatcher.dispatch(ImageScratchAction::DeleteResponseError(error)),
        }
    }

    /// Forget the scratch image locally, leaving the server untouched
    pub fn clear_local_scratch() -> Action {
        Action::ImageScratch(ImageScratchAction::ReinitLocal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::mock::{drain, server_error, MockCommunicator};
    use media_gallery_client::Response;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    const SCRATCH_URL: &str = "/media_gallery/image_scratches.json?auth_token=atoken";

    fn operations(mock: &MockCommunicator) -> GalleryOperations {
        GalleryOperations::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_create_image_scratch_ok() {
        let mock = MockCommunicator::new().on(
            "POST",
            SCRATCH_URL,
            Some(json!({"image_scratch": {"image": "data:image/png;base64,AAAA"}})),
            Ok(Response::new(
                201,
                json!({"id": 3, "image": {"url": "/uploads/3.png"}}),
            )),
        );
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .create_image_scratch(&dispatcher, "atoken", "data:image/png;base64,AAAA")
            .await;

        let actions = drain(&mut rx);
        assert_eq!(actions[0], Action::ImageScratch(ImageScratchAction::CreateRequest));
        match &actions[1] {
            Action::ImageScratch(ImageScratchAction::CreateResponseOk(scratch)) => {
                assert_eq!(scratch.id, 3);
                assert_eq!(scratch.extra["image"]["url"], "/uploads/3.png");
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_image_scratch_error() {
        let mock = MockCommunicator::new().on("POST", SCRATCH_URL, None, Err(server_error()));
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .create_image_scratch(&dispatcher, "atoken", "data")
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageScratch(ImageScratchAction::CreateRequest),
                Action::ImageScratch(ImageScratchAction::CreateResponseError(server_error())),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_image_scratch_ok() {
        let mock = MockCommunicator::new().on(
            "DELETE",
            SCRATCH_URL,
            None,
            Ok(Response::no_content()),
        );
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .delete_image_scratch(&dispatcher, "atoken")
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageScratch(ImageScratchAction::DeleteRequest),
                Action::ImageScratch(ImageScratchAction::DeleteResponseOk),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_image_scratch_error() {
        let mock = MockCommunicator::new().on("DELETE", SCRATCH_URL, None, Err(server_error()));
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .delete_image_scratch(&dispatcher, "atoken")
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageScratch(ImageScratchAction::DeleteRequest),
                Action::ImageScratch(ImageScratchAction::DeleteResponseError(server_error())),
            ]
        );
    }

    #[test]
    fn test_clear_local_scratch() {
        assert_eq!(
            GalleryOperations::clear_local_scratch(),
            Action::ImageScratch(ImageScratchAction::ReinitLocal)
        );
    }
}
