use super::{name_description_body, GalleryOperations};
use crate::actions::ImageInfoAction;
use crate::middleware::Dispatcher;
use media_gallery_client::{endpoints, GalleryId, ImageId, ImageInfo};

impl GalleryOperations {
    /// Load the images of one gallery
    pub async fn get_image_infos(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        gallery_id: GalleryId,
    ) {
        dispatcher.dispatch(ImageInfoAction::ListRequest { gallery_id });

        match self
            .get_json::<Vec<ImageInfo>>(&endpoints::image_infos_url(auth_token, gallery_id))
            .await
        {
            Ok(image_infos) => {
                log::debug!(
                    "Fetched {} images for gallery {}",
                    image_infos.len(),
                    gallery_id
                );
                dispatcher.dispatch(ImageInfoAction::ListResponseOk {
                    gallery_id,
                    image_infos,
                });
            }
            Err(error) => {
                dispatcher.dispatch(ImageInfoAction::ListResponseError { gallery_id, error })
            }
        }
    }

    pub async fn create_image_info(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        gallery_id: GalleryId,
        name: &str,
        description: Option<&str>,
    ) {
        dispatcher.dispatch(ImageInfoAction::CreateRequest {
            gallery_id,
            name: name.to_string(),
            description: description.map(str::to_string),
        });

        let body = name_description_body(name, description);
        match self
            .post_json::<ImageInfo>(&endpoints::image_infos_url(auth_token, gallery_id), &body)
            .await
        {
            Ok(image_info) => dispatcher.dispatch(ImageInfoAction::CreateResponseOk {
                gallery_id,
                image_info,
            }),
            Err(error) => {
                dispatcher.dispatch(ImageInfoAction::CreateResponseError { gallery_id, error })
            }
        }
    }

    pub async fn update_image_info(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        gallery_id: GalleryId,
        image_id: ImageId,
        name: &str,
        description: Option<&str>,
    ) {
        dispatcher.dispatch(ImageInfoAction::UpdateRequest {
            gallery_id,
            image_id,
        });

        let url = endpoints::image_info_url(auth_token, gallery_id, image_id);
        let body = name_description_body(name, description);
        match self.put_json::<ImageInfo>(&url, &body).await {
            Ok(image_info) => dispatcher.dispatch(ImageInfoAction::UpdateResponseOk {
                gallery_id,
                image_info,
            }),
            Err(error) => dispatcher.dispatch(ImageInfoAction::UpdateResponseError {
                gallery_id,
                image_id,
                error,
            }),
        }
    }

    pub async fn delete_image_info(
        &self,
        dispatcher: &Dispatcher,
        auth_token: &str,
        gallery_id: GalleryId,
        image_id: ImageId,
    ) {
        dispatcher.dispatch(ImageInfoAction::DeleteRequest {
            gallery_id,
            image_id,
        });

        let url = endpoints::image_info_url(auth_token, gallery_id, image_id);
        match self.delete(&url).await {
            Ok(()) => dispatcher.dispatch(ImageInfoAction::DeleteResponseOk {
                gallery_id,
                image_id,
            }),
            Err(error) => dispatcher.dispatch(ImageInfoAction::DeleteResponseError {
                gallery_id,
                image_id,
                error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::operations::mock::{drain, server_error, MockCommunicator};
    use media_gallery_client::Response;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    const GALLERY: GalleryId = GalleryId(23);
    const IMAGES_URL: &str = "/media_gallery/galleries/23/image_infos.json?auth_token=atoken";
    const IMAGE_22_URL: &str = "/media_gallery/galleries/23/image_infos/22.json?auth_token=atoken";

    fn image_json() -> serde_json::Value {
        json!({
            "id": 22,
            "name": "aname1",
            "description": "a description for 1",
            "originalUrl": "http://www.google.com",
            "createdOn": "12/12/2018",
            "updatedOn": "12/12/2018",
            "variants": [],
        })
    }

    fn expected_image() -> ImageInfo {
        serde_json::from_value(image_json()).unwrap()
    }

    fn operations(mock: &MockCommunicator) -> GalleryOperations {
        GalleryOperations::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_get_image_infos_ok() {
        let mock = MockCommunicator::new().on(
            "GET",
            IMAGES_URL,
            None,
            Ok(Response::ok(json!([image_json()]))),
        );
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .get_image_infos(&dispatcher, "atoken", GALLERY)
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageInfo(ImageInfoAction::ListRequest {
                    gallery_id: GALLERY
                }),
                Action::ImageInfo(ImageInfoAction::ListResponseOk {
                    gallery_id: GALLERY,
                    image_infos: vec![expected_image()],
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_image_infos_error() {
        let mock = MockCommunicator::new().on("GET", IMAGES_URL, None, Err(server_error()));
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .get_image_infos(&dispatcher, "atoken", GALLERY)
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageInfo(ImageInfoAction::ListRequest {
                    gallery_id: GALLERY
                }),
                Action::ImageInfo(ImageInfoAction::ListResponseError {
                    gallery_id: GALLERY,
                    error: server_error(),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_image_info_ok() {
        let mock = MockCommunicator::new().on(
            "POST",
            IMAGES_URL,
            Some(json!({"name": "aname1", "description": "a description for 1"})),
            Ok(Response::new(201, image_json())),
        );
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .create_image_info(
                &dispatcher,
                "atoken",
                GALLERY,
                "aname1",
                Some("a description for 1"),
            )
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageInfo(ImageInfoAction::CreateRequest {
                    gallery_id: GALLERY,
                    name: "aname1".to_string(),
                    description: Some("a description for 1".to_string()),
                }),
                Action::ImageInfo(ImageInfoAction::CreateResponseOk {
                    gallery_id: GALLERY,
                    image_info: expected_image(),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_image_info_error() {
        let mock = MockCommunicator::new().on("POST", IMAGES_URL, None, Err(server_error()));
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .create_image_info(&dispatcher, "atoken", GALLERY, "aname1", None)
            .await;

        assert_eq!(
            drain(&mut rx)[1],
            Action::ImageInfo(ImageInfoAction::CreateResponseError {
                gallery_id: GALLERY,
                error: server_error(),
            })
        );
    }

    #[tokio::test]
    async fn test_update_image_info_ok() {
        let mock = MockCommunicator::new().on(
            "PUT",
            IMAGE_22_URL,
            Some(json!({"name": "aname1", "description": null})),
            Ok(Response::ok(image_json())),
        );
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .update_image_info(&dispatcher, "atoken", GALLERY, ImageId(22), "aname1", None)
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageInfo(ImageInfoAction::UpdateRequest {
                    gallery_id: GALLERY,
                    image_id: ImageId(22),
                }),
                Action::ImageInfo(ImageInfoAction::UpdateResponseOk {
                    gallery_id: GALLERY,
                    image_info: expected_image(),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_image_info_error() {
        let mock = MockCommunicator::new().on("PUT", IMAGE_22_URL, None, Err(server_error()));
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .update_image_info(&dispatcher, "atoken", GALLERY, ImageId(22), "aname1", None)
            .await;

        assert_eq!(
            drain(&mut rx)[1],
            Action::ImageInfo(ImageInfoAction::UpdateResponseError {
                gallery_id: GALLERY,
                image_id: ImageId(22),
                error: server_error(),
            })
        );
    }

    #[tokio::test]
    async fn test_delete_image_info_ok() {
        let mock = MockCommunicator::new().on(
            "DELETE",
            IMAGE_22_URL,
            None,
            Ok(Response::no_content()),
        );
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .delete_image_info(&dispatcher, "atoken", GALLERY, ImageId(22))
            .await;

        assert_eq!(
            drain(&mut rx),
            vec![
                Action::ImageInfo(ImageInfoAction::DeleteRequest {
                    gallery_id: GALLERY,
                    image_id: ImageId(22),
                }),
                Action::ImageInfo(ImageInfoAction::DeleteResponseOk {
                    gallery_id: GALLERY,
                    image_id: ImageId(22),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_image_info_error() {
        let mock = MockCommunicator::new().on("DELETE", IMAGE_22_URL, None, Err(server_error()));
        let (dispatcher, mut rx) = Dispatcher::channel();

        operations(&mock)
            .delete_image_info(&dispatcher, "atoken", GALLERY, ImageId(22))
            .await;

        assert_eq!(
            drain(&mut rx)[1],
            Action::ImageInfo(ImageInfoAction::DeleteResponseError {
                gallery_id: GALLERY,
                image_id: ImageId(22),
                error: server_error(),
            })
        );
    }
}
