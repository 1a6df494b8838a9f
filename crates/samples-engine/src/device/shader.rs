//! WGSL compilation with diagnostics.
//!
//! wgpu reports validation failures through its own error callback; the
//! compilation info is fetched separately so warnings reach the log too.

/// Compiles `source` and logs every compiler message at its own severity.
pub(crate) fn compile_wgsl(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    report(label, &info);

    module
}

fn report(label: &str, info: &wgpu::CompilationInfo) {
    if info.messages.is_empty() {
        log::debug!("shader `{label}` compiled cleanly");
        return;
    }

    for msg in &info.messages {
        let level = message_level(&msg.message_type);
        match &msg.location {
            Some(loc) => log::log!(
                level,
                "shader `{label}` {}:{}: {}",
                loc.line_number,
                loc.line_position,
                msg.message
            ),
            None => log::log!(level, "shader `{label}`: {}", msg.message),
        }
    }
}

fn message_level(kind: &wgpu::CompilationMessageType) -> log::Level {
    match kind {
        wgpu::CompilationMessageType::Error => log::Level::Error,
        wgpu::CompilationMessageType::Warning => log::Level::Warn,
        wgpu::CompilationMessageType::Info => log::Level::Info,
    }
}
