fn main() {
  // Messages are plain prost structs in src/protocol/rpc.rs, so only the
  // service stubs are generated here and no protoc is needed.
  let method = |name: &str, route: &str, input: &str| {
    tonic_build::manual::Method::builder()
      .name(name)
      .route_name(route)
      .input_type(input)
      .output_type("crate::protocol::rpc::KeyValueResponse")
      .codec_path("tonic::codec::ProstCodec")
      .build()
  };

  let service = tonic_build::manual::Service::builder()
    .name("KeyValue")
    .package("kvrpc")
    .method(method("get", "Get", "crate::protocol::rpc::GetRequest"))
    .method(method("put", "Put", "crate::protocol::rpc::PutRequest"))
    .method(method("delete", "Delete", "crate::protocol::rpc::DeleteRequest"))
    .build();

  tonic_build::manual::Builder::new().compile(&[service]);
}
