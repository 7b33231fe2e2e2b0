use log::info;

use tuio_client::{
    transport::{udp::UdpReceiver, TransportError},
    Blob2D, Cursor2D, Listener, ListenerConfig, Object2D, Profile,
};

pub struct App {
    listener: Listener,
}

impl App {
    pub fn new(config: ListenerConfig) -> Self {
        info!("Basic TUIO Listener Demo started");

        let receiver = UdpReceiver::new(&config);
        let listener = Listener::new(config, receiver);

        listener.set_touches_added_callback(|event| {
            for touch in event.iter() {
                info!(
                    "touch {} began at ({:.3}, {:.3}) from '{}'",
                    touch.id, touch.position.x, touch.position.y, touch.source
                );
            }
        });
        listener.set_touches_removed_callback(|event| {
            for touch in event.iter() {
                info!("touch {} ended after {:.2}s", touch.id, touch.time);
            }
        });

        listener.set_added_item_callback::<Object2D, _>(|object| {
            info!(
                "object {} (class {}) placed at ({:.3}, {:.3}), angle {:.2}",
                object.session_id(),
                object.class_id(),
                object.position().x,
                object.position().y,
                object.angle()
            );
        });
        listener.set_updated_callback::<Object2D, _>(|objects| {
            info!("{} objects moved", objects.len());
        });
        listener.set_removed_item_callback::<Object2D, _>(|object| {
            info!("object {} removed", object.session_id());
        });

        listener.set_added_callback::<Blob2D, _>(|blobs| {
            info!("{} blobs appeared", blobs.len());
        });
        listener.set_removed_callback::<Blob2D, _>(|blobs| {
            info!("{} blobs disappeared", blobs.len());
        });

        Self { listener }
    }

    pub fn start(&self) -> Result<(), TransportError> {
        self.listener.bind()?;
        self.listener.listen()?;
        info!(
            "Listening for TUIO on port {}",
            self.listener.config().local_port
        );
        Ok(())
    }

    pub fn report(&self) {
        let cursors = self.listener.get_active_profiles::<Cursor2D>();
        let objects = self.listener.get_active_profiles::<Object2D>();
        if !cursors.is_empty() || !objects.is_empty() {
            info!(
                "{} cursors and {} objects active",
                cursors.len(),
                objects.len()
            );
        }
    }
}
