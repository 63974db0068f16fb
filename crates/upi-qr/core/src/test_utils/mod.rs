pub mod mock_notifier;
pub mod mock_renderer;
