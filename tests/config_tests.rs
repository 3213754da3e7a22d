#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use updraft::classifier::TypeLabel;
    use updraft::config::{Destination, UploaderConfig};
    use updraft::errors::UploaderError;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"{
                "routes": { "image": "s3", "audio": "s3", "document": "gcs" },
                "s3": { "bucket": "media-bucket", "region": "eu-west-1" },
                "gcs": { "bucket": "docs-bucket", "service_account_path": "/etc/updraft/sa.json" }
            }"#,
        );

        let config = UploaderConfig::load_from_file(file.path()).unwrap();
        let routes = config.routing_table();

        assert_eq!(routes.route(&TypeLabel::Image), Some(Destination::S3));
        assert_eq!(routes.route(&TypeLabel::Audio), Some(Destination::S3));
        assert_eq!(routes.route(&TypeLabel::Document), Some(Destination::Gcs));

        let s3 = config.s3.unwrap();
        assert_eq!(s3.bucket, "media-bucket");
        assert_eq!(s3.region, "eu-west-1");
        assert!(s3.access_key_id.is_none());

        let gcs = config.gcs.unwrap();
        assert_eq!(gcs.bucket, "docs-bucket");
        assert!(gcs.service_account_path.is_some());
    }

    #[test]
    fn test_region_defaults_when_omitted() {
        let file = write_config(
            r#"{
                "routes": { "image": "s3" },
                "s3": { "bucket": "media-bucket" }
            }"#,
        );

        let config = UploaderConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.s3.unwrap().region, "us-east-1");
    }

    #[test]
    fn test_unknown_destination_is_dropped_not_fatal() {
        let file = write_config(
            r#"{
                "routes": { "image": "s3", "audio": "ftp" },
                "s3": { "bucket": "media-bucket" }
            }"#,
        );

        let config = UploaderConfig::load_from_file(file.path()).unwrap();
        let routes = config.routing_table();
        assert_eq!(routes.route(&TypeLabel::Image), Some(Destination::S3));
        assert_eq!(routes.route(&TypeLabel::Audio), None);
    }

    #[test]
    fn test_route_to_unconfigured_backend_is_rejected() {
        let file = write_config(
            r#"{
                "routes": { "document": "gcs" },
                "s3": { "bucket": "media-bucket" }
            }"#,
        );

        let err = UploaderConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, UploaderError::Config(_)), "{err}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = UploaderConfig::load_from_file("/no/such/config.json").unwrap_err();
        assert!(matches!(err, UploaderError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let file = write_config("{ routes: oops");
        let err = UploaderConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, UploaderError::Json { .. }));
    }
}
